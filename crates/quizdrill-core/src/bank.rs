//! JSON question bank loader.
//!
//! Loads question banks from JSON files, assigns content-derived ids, and
//! validates them for authoring mistakes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::identity::ContentHash;
use crate::model::{Answer, Question};

/// Intermediate JSON structure for a bank record, before ids are assigned.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    description: String,
    answers: Vec<RawAnswer>,
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    value: String,
    correct: bool,
}

/// Load a question bank from a JSON file.
///
/// Missing file or malformed records are fatal to the caller's operation;
/// ids are recomputed on every load, never cached.
pub fn load_bank(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a JSON string into a question bank (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<Vec<Question>> {
    let raw: Vec<RawQuestion> = serde_json::from_str(content)
        .with_context(|| format!("failed to parse question bank: {}", source_path.display()))?;

    let questions: Vec<Question> = raw
        .into_iter()
        .map(|q| {
            let answers = q
                .answers
                .into_iter()
                .map(|a| Answer::new(a.value, a.correct))
                .collect();
            Question::new(q.description, answers)
        })
        .collect();

    tracing::debug!("loaded {} questions from {}", questions.len(), source_path.display());
    Ok(questions)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending question id (if applicable).
    pub question_id: Option<ContentHash>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common authoring issues.
///
/// None of these stop a session; the CLI surfaces them before one starts.
pub fn validate_bank(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Identical description text collapses to one id
    let mut seen_ids = HashSet::new();
    for q in questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question text: {:?}", q.description),
            });
        }
    }

    for q in questions {
        if q.answers.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "question has no answers".into(),
            });
        } else if !q.answers.iter().any(|a| a.correct) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "question has no correct answer; only an empty selection matches".into(),
            });
        }

        if q.answers.len() > 26 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "question has {} answers but only 26 choice letters exist",
                    q.answers.len()
                ),
            });
        }

        // Identical answer text within one question collapses to one id,
        // which makes the choices indistinguishable when scoring
        let mut seen_answers = HashSet::new();
        for a in &q.answers {
            if !seen_answers.insert(&a.id) {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id.clone()),
                    message: format!("duplicate answer text: {:?}", a.value),
                });
            }
        }
    }

    warnings
}

/// Re-shuffle every question's answer order in place.
pub fn shuffle_answers<R: Rng>(questions: &mut [Question], rng: &mut R) {
    for question in questions.iter_mut() {
        question.answers.shuffle(rng);
    }
}

/// Pick `count` questions at random without replacement, clamped to the
/// available number.
pub fn select_random<R: Rng>(questions: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    questions
        .choose_multiple(rng, count.min(questions.len()))
        .cloned()
        .collect()
}
