pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    attempt_service::AttemptService, chat_service::ChatService,
    enrollment_service::EnrollmentService, performance_service::PerformanceService,
    profile_service::ProfileService, quiz_service::QuizService, subject_service::SubjectService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub subject_service: SubjectService,
    pub quiz_service: QuizService,
    pub attempt_service: AttemptService,
    pub enrollment_service: EnrollmentService,
    pub performance_service: PerformanceService,
    pub profile_service: ProfileService,
    pub chat_service: ChatService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let subject_service = SubjectService::new(pool.clone());
        let quiz_service = QuizService::new(pool.clone());
        let attempt_service = AttemptService::new(pool.clone());
        let enrollment_service = EnrollmentService::new(pool.clone());
        let performance_service = PerformanceService::new(pool.clone());
        let profile_service = ProfileService::new(pool.clone());
        let chat_service = ChatService::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            http_client,
        );

        Self {
            pool,
            subject_service,
            quiz_service,
            attempt_service,
            enrollment_service,
            performance_service,
            profile_service,
            chat_service,
        }
    }
}
