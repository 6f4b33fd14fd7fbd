//! Core data model types for quizdrill.
//!
//! These are the value types the whole trainer works with: questions and
//! answers with content-derived ids, the per-question result slot a session
//! fills in, and the frozen attempt record that gets persisted.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::identity::ContentHash;

/// One selectable answer of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier derived from `value`.
    pub id: ContentHash,
    /// Answer text shown to the user.
    pub value: String,
    /// Whether this answer belongs to the correct set.
    pub correct: bool,
}

impl Answer {
    pub fn new(value: impl Into<String>, correct: bool) -> Self {
        let value = value.into();
        Self {
            id: ContentHash::of(&value),
            value,
            correct,
        }
    }
}

/// A multiple-choice question.
///
/// The answer order is session-local: re-shuffling it never changes the
/// question id or any answer id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier derived from `description`.
    pub id: ContentHash,
    /// Question text.
    pub description: String,
    /// Answer options in display order.
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(description: impl Into<String>, answers: Vec<Answer>) -> Self {
        let description = description.into();
        Self {
            id: ContentHash::of(&description),
            description,
            answers,
        }
    }

    /// Ids of the answers flagged correct.
    pub fn correct_answer_ids(&self) -> BTreeSet<ContentHash> {
        self.answers
            .iter()
            .filter(|a| a.correct)
            .map(|a| a.id.clone())
            .collect()
    }
}

/// Choice letter for an answer position (`0` → `A`, `1` → `B`, ...).
///
/// Only positions below 26 have a letter; the bank validator warns about
/// questions that exceed the alphabet.
pub fn choice_letter(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}

/// The result slot for one question asked in a session.
///
/// `user_answer` stays empty until the user commits a choice and may be
/// overwritten while navigating back and forth before the session ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptResult {
    /// Full question snapshot, answers in the order they were displayed.
    pub question: Question,
    /// Ids of the answers the user selected.
    pub user_answer: BTreeSet<ContentHash>,
}

impl AttemptResult {
    pub fn unanswered(question: Question) -> Self {
        Self {
            question,
            user_answer: BTreeSet::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.user_answer.is_empty()
    }

    /// Exact set equality against the correct answer ids; partial credit is
    /// never awarded.
    pub fn is_correct(&self) -> bool {
        self.user_answer == self.question.correct_answer_ids()
    }
}

/// Pass/fail threshold for an attempt, parsed from its user-entered form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PassCondition {
    /// Percentage threshold, e.g. "70%".
    Percentage(f64),
    /// Absolute correct-count threshold, e.g. "7".
    Count(u32),
}

impl PassCondition {
    /// Whether an attempt with this score passes.
    pub fn is_met(&self, score: u32, percentage: f64) -> bool {
        match self {
            PassCondition::Percentage(threshold) => percentage >= *threshold,
            PassCondition::Count(threshold) => score >= *threshold,
        }
    }
}

impl FromStr for PassCondition {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SessionError::InvalidPassCondition(s.to_string());

        if let Some(prefix) = trimmed.strip_suffix('%') {
            let threshold: f64 = prefix.trim().parse().map_err(|_| invalid())?;
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(invalid());
            }
            Ok(PassCondition::Percentage(threshold))
        } else {
            let threshold: u32 = trimmed.parse().map_err(|_| invalid())?;
            Ok(PassCondition::Count(threshold))
        }
    }
}

impl fmt::Display for PassCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassCondition::Percentage(p) if p.fract() == 0.0 => write!(f, "{p:.0}%"),
            PassCondition::Percentage(p) => write!(f, "{p}%"),
            PassCondition::Count(n) => write!(f, "{n}"),
        }
    }
}

impl TryFrom<String> for PassCondition {
    type Error = SessionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PassCondition> for String {
    fn from(cond: PassCondition) -> Self {
        cond.to_string()
    }
}

/// One completed (or time-expired) run through a question sequence.
///
/// Created at session end, immutable afterward, persisted as one JSON record
/// per attempt. Each embedded question snapshot keeps its shuffled answer
/// order and computed ids, so the record replays without the original bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamAttempt {
    /// When the attempt finished.
    pub timestamp: DateTime<Utc>,
    /// One entry per question presented, in presentation order.
    pub results: Vec<AttemptResult>,
    /// Count of exactly-correct results.
    pub score: u32,
    /// Number of questions presented (answered or not).
    pub total: u32,
    /// `100 * score / total`.
    pub percentage: f64,
    /// Whether `pass_condition` was met.
    pub passed: bool,
    /// The threshold the attempt was judged against.
    pub pass_condition: PassCondition,
    /// Wall-clock time spent, formatted MM:SS.
    pub elapsed_time: String,
    /// Session time budget in minutes.
    pub time_limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_answer_question() -> Question {
        Question::new(
            "Which keyword declares an immutable binding?",
            vec![Answer::new("let", true), Answer::new("mut", false)],
        )
    }

    #[test]
    fn answer_id_derived_from_value() {
        let a = Answer::new("let", true);
        let b = Answer::new("let", false);
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, ContentHash::of("let"));
    }

    #[test]
    fn question_id_ignores_answers() {
        let q1 = two_answer_question();
        let mut q2 = two_answer_question();
        q2.answers.reverse();
        assert_eq!(q1.id, q2.id);
        assert_eq!(q1.answers[0].id, q2.answers[1].id);
    }

    #[test]
    fn choice_letters() {
        assert_eq!(choice_letter(0), 'A');
        assert_eq!(choice_letter(3), 'D');
        assert_eq!(choice_letter(25), 'Z');
    }

    #[test]
    fn correctness_is_exact_set_equality() {
        let question = Question::new(
            "Pick both even numbers",
            vec![
                Answer::new("2", true),
                Answer::new("3", false),
                Answer::new("4", true),
            ],
        );
        let correct = question.correct_answer_ids();

        let mut result = AttemptResult::unanswered(question.clone());
        assert!(!result.is_answered());
        assert!(!result.is_correct());

        // Partial selection does not count.
        result.user_answer = [ContentHash::of("2")].into_iter().collect();
        assert!(!result.is_correct());

        result.user_answer = correct;
        assert!(result.is_correct());

        // Superset does not count either.
        result.user_answer.insert(ContentHash::of("3"));
        assert!(!result.is_correct());
    }

    #[test]
    fn pass_condition_parse_and_display() {
        assert_eq!("70%".parse::<PassCondition>().unwrap(), PassCondition::Percentage(70.0));
        assert_eq!(" 50% ".parse::<PassCondition>().unwrap(), PassCondition::Percentage(50.0));
        assert_eq!("7".parse::<PassCondition>().unwrap(), PassCondition::Count(7));
        assert_eq!(PassCondition::Percentage(70.0).to_string(), "70%");
        assert_eq!(PassCondition::Count(7).to_string(), "7");
        assert!("seven".parse::<PassCondition>().is_err());
        assert!("%".parse::<PassCondition>().is_err());
        assert!("-5".parse::<PassCondition>().is_err());
        assert!("-5%".parse::<PassCondition>().is_err());
    }

    #[test]
    fn pass_condition_thresholds() {
        let pct = PassCondition::Percentage(50.0);
        assert!(pct.is_met(1, 50.0));
        assert!(!pct.is_met(0, 49.9));

        let count = PassCondition::Count(3);
        assert!(count.is_met(3, 0.0));
        assert!(!count.is_met(2, 100.0));
    }

    #[test]
    fn attempt_serde_roundtrip() {
        let question = two_answer_question();
        let mut result = AttemptResult::unanswered(question);
        result.user_answer = result.question.correct_answer_ids();

        let attempt = ExamAttempt {
            timestamp: Utc::now(),
            results: vec![result],
            score: 1,
            total: 1,
            percentage: 100.0,
            passed: true,
            pass_condition: PassCondition::Percentage(70.0),
            elapsed_time: "01:23".into(),
            time_limit: 10,
        };

        let json = serde_json::to_string_pretty(&attempt).unwrap();
        // The pass condition persists in its user-entered string form.
        assert!(json.contains("\"pass_condition\": \"70%\""));

        let back: ExamAttempt = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 1);
        assert_eq!(back.pass_condition, PassCondition::Percentage(70.0));
        assert!(back.results[0].is_correct());
    }
}
