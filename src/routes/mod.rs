pub mod api;
pub mod extract;
pub mod health;
pub mod polls;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let base_routes = Router::new().route("/health", get(health::health));

    let polls_routes = Router::new()
        .route("/polls/", get(polls::index))
        .route("/polls/:question_id/", get(polls::detail))
        .route("/polls/:question_id/results/", get(polls::results))
        .route("/polls/:question_id/vote/", post(polls::vote));

    let api_routes = Router::new()
        .route("/api/polls/", get(api::list_questions))
        .route("/api/polls/:question_id/", get(api::get_question));

    base_routes
        .merge(polls_routes)
        .merge(api_routes)
        .with_state(state)
}
