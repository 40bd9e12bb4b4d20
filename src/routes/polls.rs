use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Serialize;

use crate::{
    dto::poll_dto::{QuestionDetailResponse, QuestionListResponse, VoteForm},
    error::Result,
    routes::extract::QuestionId,
    services::question_service::VoteOutcome,
    templates,
    utils::time,
    AppState,
};

const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

#[derive(Serialize)]
struct DetailContext {
    #[serde(flatten)]
    detail: QuestionDetailResponse,
    error_message: Option<&'static str>,
}

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let now = time::now();
    let questions = state
        .question_service
        .latest_published(now, state.index_page_size)
        .await?;
    templates::render(
        &state.templates,
        templates::INDEX,
        &QuestionListResponse::new(questions, now),
    )
}

#[axum::debug_handler]
pub async fn detail(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
) -> Result<Html<String>> {
    let now = time::now();
    let found = state.question_service.get_published(question_id, now).await?;
    let context = DetailContext {
        detail: QuestionDetailResponse::new(found, now),
        error_message: None,
    };
    templates::render(&state.templates, templates::DETAIL, &context)
}

#[axum::debug_handler]
pub async fn results(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
) -> Result<Html<String>> {
    let now = time::now();
    let found = state.question_service.get_published(question_id, now).await?;
    templates::render(
        &state.templates,
        templates::RESULTS,
        &QuestionDetailResponse::new(found, now),
    )
}

#[axum::debug_handler]
pub async fn vote(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
    form: Option<Form<VoteForm>>,
) -> Result<Response> {
    // A missing or non-form body counts as no choice.
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let now = time::now();
    let outcome = state
        .question_service
        .vote(question_id, form.choice_id(), now)
        .await?;

    match outcome {
        VoteOutcome::Recorded(_) => {
            Ok(Redirect::to(&format!("/polls/{}/results/", question_id)).into_response())
        }
        VoteOutcome::InvalidChoice(current) => {
            tracing::warn!(question_id, choice = ?form.choice, "vote without a valid choice");
            let context = DetailContext {
                detail: QuestionDetailResponse::new(current, now),
                error_message: Some(NO_CHOICE_SELECTED),
            };
            Ok(templates::render(&state.templates, templates::DETAIL, &context)?.into_response())
        }
    }
}
