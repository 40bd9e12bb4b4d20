#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use polls::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    models::question::Question,
    routes,
    services::question_service::QuestionService,
    utils::time,
    AppState,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub service: QuestionService,
    pub pool: SqlitePool,
}

pub async fn setup_app() -> TestApp {
    setup_app_with(Config::in_memory()).await
}

pub async fn setup_app_with(config: Config) -> TestApp {
    let pool = create_pool(&config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");

    let state = AppState::new(pool.clone(), &config).expect("state");
    let service = state.question_service.clone();
    TestApp {
        router: routes::router(state),
        service,
        pool,
    }
}

/// Creates a question published `days` from now, with one choice unless
/// `choice_text` is `None`.
pub async fn create_question(
    service: &QuestionService,
    question_text: &str,
    days: i64,
    choice_text: Option<&str>,
) -> Question {
    let pub_date = time::now() + Duration::days(days);
    let question = service
        .create_question(question_text, pub_date)
        .await
        .expect("create question");
    if let Some(text) = choice_text {
        service
            .add_choice(question.id, text)
            .await
            .expect("add choice");
    }
    question
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, req).await
}

pub async fn post_form(router: &Router, uri: &str, form: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(router, req).await
}

pub async fn post_without_body(router: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, req).await
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
