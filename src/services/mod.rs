pub mod attempt_service;
pub mod chat_service;
pub mod enrollment_service;
pub mod grading_service;
pub mod performance_service;
pub mod profile_service;
pub mod quiz_service;
pub mod subject_service;
