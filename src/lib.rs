pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::question_service::QuestionService;
use sqlx::SqlitePool;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub question_service: QuestionService,
    pub templates: Arc<Tera>,
    pub index_page_size: i64,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self> {
        let question_service = QuestionService::new(pool.clone());
        let templates = Arc::new(templates::load()?);

        Ok(Self {
            pool,
            question_service,
            templates,
            index_page_size: config.index_page_size,
        })
    }
}
