use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// One quiz per (subject, topic). `questions` holds the ordered question
/// documents; authoring always replaces the whole array.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub subject_name: String,
    pub topic_title: String,
    pub questions: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub fn parsed_questions(&self) -> Vec<Question> {
        serde_json::from_value(self.questions.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "TF")]
    TrueFalse,
}

impl Question {
    /// MCQ carries exactly 4 non-empty options; True/False carries none.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.text.trim().is_empty() {
            return Err(crate::error::Error::BadRequest(
                "Question text must not be empty".to_string(),
            ));
        }
        if self.correct_answer.trim().is_empty() {
            return Err(crate::error::Error::BadRequest(format!(
                "Question '{}' is missing a correct answer",
                self.text
            )));
        }
        match self.kind {
            QuestionKind::Mcq => {
                if self.options.len() != 4 || self.options.iter().any(|o| o.trim().is_empty()) {
                    return Err(crate::error::Error::BadRequest(format!(
                        "MCQ question '{}' must have exactly 4 non-empty options",
                        self.text
                    )));
                }
            }
            QuestionKind::TrueFalse => {
                if !self.options.is_empty() {
                    return Err(crate::error::Error::BadRequest(format!(
                        "True/False question '{}' must not carry options",
                        self.text
                    )));
                }
            }
        }
        Ok(())
    }
}
