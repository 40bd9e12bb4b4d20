mod common;

use axum::http::StatusCode;
use common::{create_question, get, setup_app, setup_app_with};
use polls::config::Config;
use serde_json::Value as JsonValue;

const CHOICE: Option<&str> = Some("Choice text");

async fn listed_ids(router: &axum::Router) -> Vec<i64> {
    let (status, body) = get(router, "/api/polls/").await;
    assert_eq!(status, StatusCode::OK);
    let body: JsonValue = serde_json::from_str(&body).unwrap();
    body["latest_question_list"]
        .as_array()
        .expect("latest_question_list")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn no_questions_shows_placeholder() {
    let app = setup_app().await;

    let (status, body) = get(&app.router, "/polls/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No polls are available."));
    assert!(listed_ids(&app.router).await.is_empty());
}

#[tokio::test]
async fn past_question_is_listed() {
    let app = setup_app().await;
    let question = create_question(&app.service, "Past question", -30, CHOICE).await;

    let (status, body) = get(&app.router, "/polls/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Past question"));
    assert!(body.contains(&format!("href=\"/polls/{}/\"", question.id)));
    assert_eq!(listed_ids(&app.router).await, vec![question.id]);
}

#[tokio::test]
async fn future_question_is_not_listed() {
    let app = setup_app().await;
    create_question(&app.service, "Future question", 30, CHOICE).await;

    let (_, body) = get(&app.router, "/polls/").await;
    assert!(body.contains("No polls are available."));
    assert!(!body.contains("Future question"));
    assert!(listed_ids(&app.router).await.is_empty());
}

#[tokio::test]
async fn only_past_questions_are_listed() {
    let app = setup_app().await;
    let question = create_question(&app.service, "Past question", -30, CHOICE).await;
    create_question(&app.service, "Future question", 30, CHOICE).await;

    assert_eq!(listed_ids(&app.router).await, vec![question.id]);
}

#[tokio::test]
async fn two_past_questions_newest_first() {
    let app = setup_app().await;
    let question1 = create_question(&app.service, "Past question 1", -29, CHOICE).await;
    let question2 = create_question(&app.service, "Past question 2", -5, CHOICE).await;

    assert_eq!(listed_ids(&app.router).await, vec![question2.id, question1.id]);

    let (_, body) = get(&app.router, "/polls/").await;
    let first = body.find("Past question 2").unwrap();
    let second = body.find("Past question 1").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn question_without_choices_is_not_listed() {
    let app = setup_app().await;
    create_question(&app.service, "Past question 1", -29, None).await;

    assert!(listed_ids(&app.router).await.is_empty());
}

#[tokio::test]
async fn question_with_a_choice_is_listed() {
    let app = setup_app().await;
    let question = create_question(&app.service, "Past question 1", -29, Some("Random choice")).await;

    assert_eq!(listed_ids(&app.router).await, vec![question.id]);
}

#[tokio::test]
async fn question_with_many_choices_is_listed_once() {
    let app = setup_app().await;
    let question = create_question(&app.service, "Popular", -2, CHOICE).await;
    app.service.add_choice(question.id, "Another").await.unwrap();
    app.service.add_choice(question.id, "Third").await.unwrap();

    assert_eq!(listed_ids(&app.router).await, vec![question.id]);
}

#[tokio::test]
async fn index_is_capped_at_page_size() {
    let config = Config {
        index_page_size: 2,
        ..Config::in_memory()
    };
    let app = setup_app_with(config).await;
    let oldest = create_question(&app.service, "Oldest", -10, CHOICE).await;
    let middle = create_question(&app.service, "Middle", -5, CHOICE).await;
    let newest = create_question(&app.service, "Newest", -1, CHOICE).await;

    let ids = listed_ids(&app.router).await;
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert!(!ids.contains(&oldest.id));
}

#[tokio::test]
async fn listing_reports_recency() {
    let app = setup_app().await;
    create_question(&app.service, "Old", -3, CHOICE).await;

    let (_, body) = get(&app.router, "/api/polls/").await;
    let body: JsonValue = serde_json::from_str(&body).unwrap();
    assert_eq!(body["latest_question_list"][0]["question_text"], "Old");
    assert_eq!(body["latest_question_list"][0]["was_published_recently"], false);
}
