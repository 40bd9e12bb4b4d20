use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{choice::Choice, question::Question};

#[derive(Clone)]
pub struct QuestionService {
    pool: SqlitePool,
}

/// A published question together with its choices.
#[derive(Debug, Clone)]
pub struct QuestionWithChoices {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub enum VoteOutcome {
    Recorded(Choice),
    /// The submitted choice does not belong to the question.
    InvalidChoice(QuestionWithChoices),
}

impl QuestionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_question(
        &self,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO polls_question (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            "#,
        )
        .bind(question_text)
        .bind(pub_date)
        .fetch_one(&self.pool)
        .await?;

        debug!(question_id = question.id, "created question");
        Ok(question)
    }

    pub async fn add_choice(&self, question_id: i64, choice_text: &str) -> Result<Choice> {
        let choice = sqlx::query_as::<_, Choice>(
            r#"
            INSERT INTO polls_choice (question_id, choice_text, votes)
            VALUES ($1, $2, 0)
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(question_id)
        .bind(choice_text)
        .fetch_one(&self.pool)
        .await?;

        debug!(question_id, choice_id = choice.id, "added choice");
        Ok(choice)
    }

    /// Published questions that have at least one choice, newest first.
    pub async fn latest_published(&self, now: DateTime<Utc>, limit: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.id, q.question_text, q.pub_date
            FROM polls_question q
            WHERE q.pub_date <= $1
              AND EXISTS (SELECT 1 FROM polls_choice c WHERE c.question_id = q.id)
            ORDER BY q.pub_date DESC, q.id DESC
            LIMIT $2
            "#,
        )
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = questions.len(), "listed latest questions");
        Ok(questions)
    }

    /// Future-dated questions are reported as missing.
    pub async fn get_published(&self, id: i64, now: DateTime<Utc>) -> Result<QuestionWithChoices> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question_text, pub_date
            FROM polls_question
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .filter(|q| q.is_published(now))
        .ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))?;

        let choices = self.choices_for(question.id).await?;
        Ok(QuestionWithChoices { question, choices })
    }

    pub async fn choices_for(&self, question_id: i64) -> Result<Vec<Choice>> {
        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM polls_choice
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(choices)
    }

    pub async fn vote(
        &self,
        question_id: i64,
        choice_id: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<VoteOutcome> {
        let current = self.get_published(question_id, now).await?;

        let Some(choice_id) = choice_id else {
            return Ok(VoteOutcome::InvalidChoice(current));
        };

        let updated = sqlx::query_as::<_, Choice>(
            r#"
            UPDATE polls_choice
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(choice) => {
                info!(question_id, choice_id, votes = choice.votes, "vote recorded");
                Ok(VoteOutcome::Recorded(choice))
            }
            None => Ok(VoteOutcome::InvalidChoice(current)),
        }
    }
}
