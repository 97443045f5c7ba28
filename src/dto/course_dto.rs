use crate::models::enrollment::CourseEnrollment;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCourseRequest {
    #[validate(length(min = 1, message = "userEmail is required"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "subjectName is required"))]
    pub subject_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinishCourseRequest {
    #[validate(length(min = 1, message = "userEmail is required"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "subjectName is required"))]
    pub subject_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListResponse {
    pub courses: Vec<CourseEnrollment>,
}
