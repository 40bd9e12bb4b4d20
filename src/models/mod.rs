pub mod choice;
pub mod question;
