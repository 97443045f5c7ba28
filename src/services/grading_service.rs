use crate::dto::quiz_dto::SubmittedAnswer;
use crate::models::attempt::AnswerRecord;
use crate::models::quiz::Question;

pub struct GradingService;

impl GradingService {
    /// Trimmed, case-insensitive equality. No partial credit; an unanswered
    /// (empty) selection never matches.
    pub fn answer_matches(selected: &str, correct: &str) -> bool {
        let selected = selected.trim();
        if selected.is_empty() {
            return false;
        }
        selected.to_lowercase() == correct.trim().to_lowercase()
    }

    /// Regrades a submission against the quiz's own answer key. The stored
    /// record follows the question order of the quiz, so the returned score
    /// always equals the number of matching entries in the returned records.
    /// Submitted answers are paired to questions by question text; questions
    /// without a submitted answer count as unanswered.
    pub fn grade(
        questions: &[Question],
        submitted: &[SubmittedAnswer],
    ) -> (i32, Vec<AnswerRecord>) {
        let mut records = Vec::with_capacity(questions.len());
        let mut score = 0;

        for question in questions {
            let selected = submitted
                .iter()
                .find(|a| a.question.trim() == question.text.trim())
                .map(|a| a.selected_answer.clone())
                .unwrap_or_default();

            if Self::answer_matches(&selected, &question.correct_answer) {
                score += 1;
            }

            records.push(AnswerRecord {
                question: question.text.clone(),
                selected_answer: selected,
                correct_answer: question.correct_answer.clone(),
            });
        }

        (score, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::QuestionKind;

    fn tf(text: &str, answer: &str) -> Question {
        Question {
            text: text.to_string(),
            kind: QuestionKind::TrueFalse,
            options: vec![],
            correct_answer: answer.to_string(),
        }
    }

    fn submitted(question: &str, selected: &str) -> SubmittedAnswer {
        SubmittedAnswer {
            question: question.to_string(),
            selected_answer: selected.to_string(),
            correct_answer: None,
        }
    }

    #[test]
    fn comparison_is_trimmed_and_case_insensitive() {
        assert!(GradingService::answer_matches(" True ", "true"));
        assert!(GradingService::answer_matches("TRUE", "  true"));
        assert!(!GradingService::answer_matches("False", "true"));
    }

    #[test]
    fn empty_selection_never_matches() {
        assert!(!GradingService::answer_matches("", "true"));
        assert!(!GradingService::answer_matches("   ", "true"));
    }

    #[test]
    fn score_counts_matching_answers_only() {
        let questions = vec![tf("Q1", "True"), tf("Q2", "False"), tf("Q3", "True")];
        let answers = vec![
            submitted("Q1", " true "),
            submitted("Q2", "True"),
            submitted("Q3", "TRUE"),
        ];

        let (score, records) = GradingService::grade(&questions, &answers);
        assert_eq!(score, 2);
        assert_eq!(records.len(), 3);

        // The invariant: score equals the matching-record count.
        let matching = records
            .iter()
            .filter(|r| GradingService::answer_matches(&r.selected_answer, &r.correct_answer))
            .count();
        assert_eq!(score as usize, matching);
    }

    #[test]
    fn unsubmitted_questions_count_as_unanswered() {
        let questions = vec![tf("Q1", "True"), tf("Q2", "False")];
        let answers = vec![submitted("Q1", "True")];

        let (score, records) = GradingService::grade(&questions, &answers);
        assert_eq!(score, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].selected_answer, "");
    }

    #[test]
    fn client_answer_key_is_ignored() {
        let questions = vec![tf("Q1", "False")];
        // Client claims the correct answer is whatever it selected.
        let answers = vec![SubmittedAnswer {
            question: "Q1".to_string(),
            selected_answer: "True".to_string(),
            correct_answer: Some("True".to_string()),
        }];

        let (score, records) = GradingService::grade(&questions, &answers);
        assert_eq!(score, 0);
        assert_eq!(records[0].correct_answer, "False");
    }

    #[test]
    fn empty_quiz_grades_to_zero() {
        let (score, records) = GradingService::grade(&[], &[submitted("Q1", "True")]);
        assert_eq!(score, 0);
        assert!(records.is_empty());
    }

    #[test]
    fn score_is_bounded_by_answer_count() {
        let questions = vec![tf("Q1", "True"), tf("Q2", "True")];
        let answers = vec![submitted("Q1", "True"), submitted("Q2", "True")];
        let (score, records) = GradingService::grade(&questions, &answers);
        assert!(score >= 0 && score as usize <= records.len());
    }
}
