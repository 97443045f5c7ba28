use crate::dto::performance_dto::{
    OverviewResponse, SubjectAverage, SubjectPerformanceResponse, Summary, TopicScore,
};
use crate::error::Result;
use crate::models::attempt::Attempt;
use crate::services::attempt_service::AttemptService;
use crate::services::enrollment_service::EnrollmentService;
use crate::services::quiz_service::QuizService;
use sqlx::PgPool;
use std::collections::HashMap;

/// A topic is weak when its percentage is strictly below this.
pub const WEAK_TOPIC_THRESHOLD: i64 = 50;

/// Per-topic percentage. A zero (or missing) denominator yields 0 rather
/// than a division error.
pub fn topic_percent(score: i64, total_questions: i64) -> i64 {
    if total_questions <= 0 {
        return 0;
    }
    ((100 * score) as f64 / total_questions as f64).round() as i64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derives per-topic percentages, the subject average (mean of the
/// per-topic percentages, one decimal) and the weak-topic list from a raw
/// attempt set. Topics absent from `totals` default to a 0 denominator.
/// Empty input produces the zero-state summary, never an error.
pub fn summarize(attempts: &[Attempt], totals: &HashMap<String, i64>) -> Summary {
    let per_topic: Vec<TopicScore> = attempts
        .iter()
        .map(|attempt| TopicScore {
            topic_title: attempt.topic_title.clone(),
            score_percent: topic_percent(
                attempt.score as i64,
                totals.get(&attempt.topic_title).copied().unwrap_or(0),
            ),
        })
        .collect();

    let average_score_percent = if per_topic.is_empty() {
        0.0
    } else {
        round_one_decimal(
            per_topic.iter().map(|t| t.score_percent as f64).sum::<f64>()
                / per_topic.len() as f64,
        )
    };

    let weak_topics = per_topic
        .iter()
        .filter(|t| t.score_percent < WEAK_TOPIC_THRESHOLD)
        .cloned()
        .collect();

    Summary {
        average_score_percent,
        weak_topics,
        per_topic,
    }
}

/// Mean of the per-subject averages. Deliberately NOT a flat mean over all
/// topic scores pooled together; the two differ whenever subjects have
/// different numbers of attempted topics.
pub fn global_average(subject_averages: &[f64]) -> f64 {
    if subject_averages.is_empty() {
        return 0.0;
    }
    round_one_decimal(subject_averages.iter().sum::<f64>() / subject_averages.len() as f64)
}

/// Fixed feedback tiers driven by the average percentage.
pub fn mastery_feedback(average_percent: f64) -> &'static str {
    if average_percent >= 80.0 {
        "Excellent! Keep it up."
    } else if average_percent >= 60.0 {
        "Good work! Review low-score topics to improve."
    } else {
        "Needs improvement. Revisit the weak topics and try again."
    }
}

/// Stateless reader over the attempt, quiz and enrollment stores; all
/// derivation happens in the pure functions above.
#[derive(Clone)]
pub struct PerformanceService {
    attempt_service: AttemptService,
    quiz_service: QuizService,
    enrollment_service: EnrollmentService,
}

impl PerformanceService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            attempt_service: AttemptService::new(pool.clone()),
            quiz_service: QuizService::new(pool.clone()),
            enrollment_service: EnrollmentService::new(pool),
        }
    }

    pub async fn subject_summary(
        &self,
        user_email: &str,
        subject_name: &str,
    ) -> Result<SubjectPerformanceResponse> {
        let attempts = self
            .attempt_service
            .list_attempts(user_email, subject_name)
            .await?;
        let totals = self.quiz_service.topic_totals(subject_name).await?;

        let summary = summarize(&attempts, &totals);
        let feedback = mastery_feedback(summary.average_score_percent).to_string();

        Ok(SubjectPerformanceResponse {
            subject_name: subject_name.to_string(),
            summary,
            feedback,
        })
    }

    /// Global view across the user's finished subjects. No finished
    /// subjects renders the zero state, not an error.
    pub async fn overview(&self, user_email: &str) -> Result<OverviewResponse> {
        let finished = self
            .enrollment_service
            .list_finished_subjects(user_email)
            .await?;

        let mut subjects = Vec::with_capacity(finished.len());
        let mut averages = Vec::with_capacity(finished.len());
        for subject_name in finished {
            let attempts = self
                .attempt_service
                .list_attempts(user_email, &subject_name)
                .await?;
            let totals = self.quiz_service.topic_totals(&subject_name).await?;
            let summary = summarize(&attempts, &totals);
            averages.push(summary.average_score_percent);
            subjects.push(SubjectAverage {
                feedback: mastery_feedback(summary.average_score_percent).to_string(),
                average_score_percent: summary.average_score_percent,
                subject_name,
            });
        }

        let global = global_average(&averages);
        Ok(OverviewResponse {
            global_average_percent: global,
            subjects,
            feedback: mastery_feedback(global).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn attempt(topic: &str, score: i32) -> Attempt {
        Attempt {
            id: Uuid::new_v4(),
            user_email: "student@example.com".to_string(),
            subject_name: "Java".to_string(),
            topic_title: topic.to_string(),
            score,
            answers: serde_json::json!([]),
            attempted_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_yields_zero_state() {
        let summary = summarize(&[], &HashMap::new());
        assert_eq!(summary.average_score_percent, 0.0);
        assert!(summary.weak_topics.is_empty());
        assert!(summary.per_topic.is_empty());
    }

    #[test]
    fn weak_topics_are_strictly_below_fifty() {
        let attempts = vec![attempt("A", 2), attempt("B", 5)];
        let totals = HashMap::from([("A".to_string(), 10), ("B".to_string(), 10)]);

        let summary = summarize(&attempts, &totals);
        assert_eq!(
            summary.per_topic,
            vec![
                TopicScore {
                    topic_title: "A".to_string(),
                    score_percent: 20
                },
                TopicScore {
                    topic_title: "B".to_string(),
                    score_percent: 50
                },
            ]
        );
        // 50 is not weak; only strictly-below-threshold topics qualify.
        assert_eq!(summary.weak_topics.len(), 1);
        assert_eq!(summary.weak_topics[0].topic_title, "A");
        assert_eq!(summary.average_score_percent, 35.0);
    }

    #[test]
    fn zero_denominator_scores_zero() {
        let attempts = vec![attempt("Empty topic", 3)];
        let totals = HashMap::from([("Empty topic".to_string(), 0)]);
        let summary = summarize(&attempts, &totals);
        assert_eq!(summary.per_topic[0].score_percent, 0);
    }

    #[test]
    fn missing_denominator_defaults_to_zero() {
        let attempts = vec![attempt("Unknown topic", 4)];
        let summary = summarize(&attempts, &HashMap::new());
        assert_eq!(summary.per_topic[0].score_percent, 0);
        assert_eq!(summary.average_score_percent, 0.0);
    }

    #[test]
    fn per_topic_percent_rounds_to_nearest() {
        // 1/3 -> 33, 2/3 -> 67
        assert_eq!(topic_percent(1, 3), 33);
        assert_eq!(topic_percent(2, 3), 67);
        assert_eq!(topic_percent(10, 10), 100);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let attempts = vec![attempt("A", 1), attempt("B", 2), attempt("C", 2)];
        let totals = HashMap::from([
            ("A".to_string(), 3),
            ("B".to_string(), 3),
            ("C".to_string(), 3),
        ]);
        // percents 33, 67, 67 -> mean 55.666... -> 55.7
        let summary = summarize(&attempts, &totals);
        assert_eq!(summary.average_score_percent, 55.7);
    }

    #[test]
    fn global_average_is_a_mean_of_means() {
        // Subject X: topics [100, 0] -> avg 50. Subject Y: [80] -> avg 80.
        // Global must be mean(50, 80) = 65, not mean(100, 0, 80) = 60.
        assert_eq!(global_average(&[50.0, 80.0]), 65.0);
        assert_eq!(global_average(&[]), 0.0);
    }

    #[test]
    fn mastery_tiers_use_fixed_thresholds() {
        assert_eq!(mastery_feedback(80.0), "Excellent! Keep it up.");
        assert_eq!(mastery_feedback(95.5), "Excellent! Keep it up.");
        assert_eq!(
            mastery_feedback(60.0),
            "Good work! Review low-score topics to improve."
        );
        assert_eq!(
            mastery_feedback(79.9),
            "Good work! Review low-score topics to improve."
        );
        assert_eq!(
            mastery_feedback(59.9),
            "Needs improvement. Revisit the weak topics and try again."
        );
        assert_eq!(
            mastery_feedback(0.0),
            "Needs improvement. Revisit the weak topics and try again."
        );
    }
}
