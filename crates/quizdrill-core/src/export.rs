//! Tabular statistics export.
//!
//! Turns the aggregated question histories into a rectangular table (one
//! row per question, one column per historical attempt) and writes it as
//! CSV with a header row.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{choice_letter, Question};
use crate::statistics::QuestionHistory;

/// A rectangular table ready for serialization.
#[derive(Debug, Clone)]
pub struct StatisticsTable {
    /// `Question`, then `Attempt 1`..`Attempt K`.
    pub headers: Vec<String>,
    /// One row per question, blank-padded to the header width.
    pub rows: Vec<Vec<String>>,
}

/// Render a question with its lettered options and correct-answer list as
/// one display cell.
pub fn question_display_text(question: &Question) -> String {
    let options: Vec<String> = question
        .answers
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}. {}", choice_letter(i), a.value))
        .collect();

    let correct: Vec<String> = question
        .answers
        .iter()
        .enumerate()
        .filter(|(_, a)| a.correct)
        .map(|(i, a)| format!("{}. {}", choice_letter(i), a.value))
        .collect();

    format!(
        "{}\n{}\n\nCorrect answers: {}",
        question.description,
        options.join("\n"),
        correct.join(", ")
    )
}

/// Build the export table from question histories in first-seen order.
///
/// Column count is `1 + K` where K is the most attempts any question has;
/// questions with fewer attempts get trailing blank cells.
pub fn build_statistics_table(histories: &[QuestionHistory]) -> StatisticsTable {
    let max_attempts = histories.iter().map(|h| h.outcomes.len()).max().unwrap_or(0);

    let mut headers = Vec::with_capacity(1 + max_attempts);
    headers.push("Question".to_string());
    for i in 1..=max_attempts {
        headers.push(format!("Attempt {i}"));
    }

    let rows = histories
        .iter()
        .map(|history| {
            let mut row = Vec::with_capacity(1 + max_attempts);
            row.push(question_display_text(&history.question));
            for &correct in &history.outcomes {
                row.push(if correct { "Correct" } else { "Incorrect" }.to_string());
            }
            row.resize(1 + max_attempts, String::new());
            row
        })
        .collect();

    StatisticsTable { headers, rows }
}

/// Write the table as CSV with a header row.
pub fn write_csv(table: &StatisticsTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create statistics file: {}", path.display()))?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write statistics file: {}", path.display()))?;

    tracing::debug!("exported {} question rows to {}", table.rows.len(), path.display());
    Ok(())
}
