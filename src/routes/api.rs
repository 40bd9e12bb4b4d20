use axum::{
    extract::State,
    response::Json,
};

use crate::{
    dto::poll_dto::{QuestionDetailResponse, QuestionListResponse},
    error::Result,
    routes::extract::QuestionId,
    utils::time,
    AppState,
};

#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<Json<QuestionListResponse>> {
    let now = time::now();
    let questions = state
        .question_service
        .latest_published(now, state.index_page_size)
        .await?;
    Ok(Json(QuestionListResponse::new(questions, now)))
}

#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
) -> Result<Json<QuestionDetailResponse>> {
    let now = time::now();
    let found = state.question_service.get_published(question_id, now).await?;
    Ok(Json(QuestionDetailResponse::new(found, now)))
}
