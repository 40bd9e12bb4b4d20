use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

pub const INDEX: &str = "polls/index.html";
pub const DETAIL: &str = "polls/detail.html";
pub const RESULTS: &str = "polls/results.html";

/// Builds the template set from the files compiled into the binary.
pub fn load() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            "polls/base.html",
            include_str!("../templates/polls/base.html"),
        ),
        (INDEX, include_str!("../templates/polls/index.html")),
        (DETAIL, include_str!("../templates/polls/detail.html")),
        (RESULTS, include_str!("../templates/polls/results.html")),
    ])?;
    Ok(tera)
}

pub fn render<T: Serialize>(tera: &Tera, name: &str, data: &T) -> Result<Html<String>> {
    let context = Context::from_serialize(data)?;
    Ok(Html(tera.render(name, &context)?))
}
