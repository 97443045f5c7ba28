use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicScore {
    pub topic_title: String,
    pub score_percent: i64,
}

/// Derived statistics for one subject's attempt set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average_score_percent: f64,
    pub weak_topics: Vec<TopicScore>,
    pub per_topic: Vec<TopicScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformanceResponse {
    pub subject_name: String,
    #[serde(flatten)]
    pub summary: Summary,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAverage {
    pub subject_name: String,
    pub average_score_percent: f64,
    pub feedback: String,
}

/// Global view across a user's finished subjects. The global average is a
/// mean of the per-subject averages, not a flat pool of topic scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub global_average_percent: f64,
    pub subjects: Vec<SubjectAverage>,
    pub feedback: String,
}
