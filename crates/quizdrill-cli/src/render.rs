//! Screen rendering for the interactive surface.

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{Cell, Table};
use quizdrill_core::model::{choice_letter, AttemptResult, ExamAttempt};
use quizdrill_core::session::format_clock;

pub fn clear_screen() {
    // ANSI clear + cursor home.
    print!("\x1B[2J\x1B[1;1H");
}

/// Draw one question with its options, any previously selected letters, and
/// the remaining time.
pub fn question_screen(result: &AttemptResult, index: usize, total: usize, remaining: Duration) {
    clear_screen();
    println!("{}", "=".repeat(40));
    println!("Question {}/{}", index + 1, total);
    println!();
    println!("{}", result.question.description);
    println!();
    println!("{}", "*".repeat(40));
    println!();

    for (i, answer) in result.question.answers.iter().enumerate() {
        println!("{}. {}", choice_letter(i), answer.value);
    }

    if result.is_answered() {
        let letters: Vec<String> = result
            .question
            .answers
            .iter()
            .enumerate()
            .filter(|(_, a)| result.user_answer.contains(&a.id))
            .map(|(i, _)| choice_letter(i).to_string())
            .collect();
        println!("\nYour previous answer: {}", letters.join(", "));
    }

    println!();
    println!("{}", "*".repeat(40));
    println!("Remaining time: {}", format_clock(remaining));
}

/// Summary table for a just-finished attempt.
pub fn results_summary(attempt: &ExamAttempt) {
    let mut table = Table::new();
    table.set_header(vec!["Correct", "Score", "Status", "Time taken", "Pass condition"]);
    table.add_row(vec![
        Cell::new(format!("{}/{}", attempt.score, attempt.total)),
        Cell::new(format!("{:.2}%", attempt.percentage)),
        Cell::new(if attempt.passed { "PASS" } else { "FAIL" }),
        Cell::new(&attempt.elapsed_time),
        Cell::new(attempt.pass_condition.to_string()),
    ]);

    println!("Exam results:\n{table}");
}

/// Details of a saved attempt, shown before a retake.
pub fn attempt_overview(attempt: &ExamAttempt) {
    println!("Saved exam:");
    println!("  Date and time:   {}", attempt.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  Correct answers: {}/{}", attempt.score, attempt.total);
    println!("  Score:           {:.2}%", attempt.percentage);
    println!("  Status:          {}", if attempt.passed { "PASS" } else { "FAIL" });
    println!("  Pass condition:  {}", attempt.pass_condition);
    println!("  Time taken:      {}", attempt.elapsed_time);
    println!("  Exam time:       {} minutes", attempt.time_limit);
}

/// Numbered listing of saved attempt files.
pub fn attempt_list(paths: &[PathBuf]) {
    for (i, path) in paths.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("{}. {}", i + 1, name);
    }
}
