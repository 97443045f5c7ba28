use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub introduction: IntroductionPayload,
    #[serde(default)]
    pub topics: Vec<TopicPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectRequest {
    pub introduction: Option<IntroductionPayload>,
    pub topics: Option<Vec<TopicPayload>>,
}

/// Keys match the stored subject documents (`why_learn` is snake_case there).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroductionPayload {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub why_learn: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPayload {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExamplePayload>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePayload {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectName {
    pub name: String,
}
