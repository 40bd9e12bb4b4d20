pub mod poll_dto;
