pub mod chat;
pub mod course;
pub mod health;
pub mod performance;
pub mod profile;
pub mod quiz;
pub mod role;
pub mod subject;
