//! Per-question accuracy aggregation across the attempt history.

use std::collections::{HashMap, HashSet};

use crate::identity::ContentHash;
use crate::model::{ExamAttempt, Question};

/// The recorded outcomes of one question across all attempts.
#[derive(Debug, Clone)]
pub struct QuestionHistory {
    /// Representative snapshot: the first instance of the id encountered.
    pub question: Question,
    /// Correct/incorrect per attempt, oldest first.
    pub outcomes: Vec<bool>,
}

impl QuestionHistory {
    pub fn attempts(&self) -> u32 {
        self.outcomes.len() as u32
    }

    pub fn correct_count(&self) -> u32 {
        self.outcomes.iter().filter(|&&correct| correct).count() as u32
    }

    /// Correct-answer rate in percent; 0 for an empty history.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        100.0 * f64::from(self.correct_count()) / f64::from(self.attempts())
    }
}

/// Collect every question's outcome history from `attempts`.
///
/// Pass attempts oldest first; outcome order and the first-seen question
/// order both follow the scan order.
pub fn aggregate_history(attempts: &[ExamAttempt]) -> Vec<QuestionHistory> {
    let mut histories: Vec<QuestionHistory> = Vec::new();
    let mut index_by_id: HashMap<ContentHash, usize> = HashMap::new();

    for attempt in attempts {
        for result in &attempt.results {
            let idx = *index_by_id.entry(result.question.id.clone()).or_insert_with(|| {
                histories.push(QuestionHistory {
                    question: result.question.clone(),
                    outcomes: Vec::new(),
                });
                histories.len() - 1
            });
            histories[idx].outcomes.push(result.is_correct());
        }
    }

    histories
}

/// Questions whose historical accuracy is strictly below `threshold`
/// percent, as material for a remediation exam.
pub fn low_accuracy_questions(attempts: &[ExamAttempt], threshold: f64) -> Vec<Question> {
    aggregate_history(attempts)
        .into_iter()
        .filter(|h| h.accuracy() < threshold)
        .map(|h| h.question)
        .collect()
}

/// Every question id observed anywhere in the attempt history.
pub fn seen_question_ids(attempts: &[ExamAttempt]) -> HashSet<ContentHash> {
    attempts
        .iter()
        .flat_map(|a| a.results.iter())
        .map(|r| r.question.id.clone())
        .collect()
}
