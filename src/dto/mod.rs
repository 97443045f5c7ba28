pub mod chat_dto;
pub mod course_dto;
pub mod performance_dto;
pub mod quiz_dto;
pub mod subject_dto;
pub mod user_dto;
