use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::Error;

/// `:question_id` path segment. Anything that is not an `i64` cannot name a
/// question, so it is reported as missing rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct QuestionId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for QuestionId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| Error::NotFound("Question not found".to_string()))?;

        raw.parse()
            .map(QuestionId)
            .map_err(|_| Error::NotFound(format!("Question {} not found", raw)))
    }
}
