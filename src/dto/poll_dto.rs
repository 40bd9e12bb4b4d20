use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{choice::Choice, question::Question};
use crate::services::question_service::QuestionWithChoices;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionResponse {
    pub fn new(question: Question, now: DateTime<Utc>) -> Self {
        let was_published_recently = question.was_published_recently(now);
        Self {
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
            was_published_recently,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub latest_question_list: Vec<QuestionResponse>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, now: DateTime<Utc>) -> Self {
        Self {
            latest_question_list: questions
                .into_iter()
                .map(|q| QuestionResponse::new(q, now))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetailResponse {
    pub question: QuestionResponse,
    pub choices: Vec<Choice>,
}

impl QuestionDetailResponse {
    pub fn new(value: QuestionWithChoices, now: DateTime<Utc>) -> Self {
        Self {
            question: QuestionResponse::new(value.question, now),
            choices: value.choices,
        }
    }
}

/// Form body of a vote. `choice` stays a string so garbage input
/// re-renders the form instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}
