//! Interactive adapter that drives an exam session from the terminal.
//!
//! The session state machine is pure; this module owns the wall clock,
//! reads actions from stdin, and re-prompts on anything the parser or the
//! machine rejects.

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use quizdrill_core::bank;
use quizdrill_core::model::{ExamAttempt, Question};
use quizdrill_core::session::{ExamSession, SessionAction, StepOutcome};
use quizdrill_core::store::AttemptStore;

use crate::{input, prompt, render};

/// Run a session against the terminal until it completes or runs out of
/// time, then freeze it into its scored record.
pub fn run_session(mut session: ExamSession) -> Result<ExamAttempt> {
    let started = Instant::now();

    while !session.is_finished() {
        let elapsed = started.elapsed();
        if session.remaining(elapsed).is_zero() {
            // Marks the session expired; answers recorded so far are kept.
            session.step(SessionAction::RefreshClock, elapsed);
            break;
        }

        let Some(result) = session.current() else {
            break;
        };
        let answer_count = result.question.answers.len();
        render::question_screen(result, session.current_index(), session.total(), session.remaining(elapsed));

        let line =
            prompt::read_line("\nSelect answer (e.g. AB), 'back', 'next' to skip, or 'r' to redisplay: ")?;
        let Some(action) = input::parse_action(&line, answer_count) else {
            println!("Invalid answer, please try again.");
            prompt::pause()?;
            continue;
        };

        match session.step(action, started.elapsed()) {
            StepOutcome::NeedsAnswer => {
                println!("You haven't selected any answer yet. Pick at least one before skipping.");
                prompt::pause()?;
            }
            StepOutcome::InvalidSelection => {
                println!("Invalid answer, please try again.");
                prompt::pause()?;
            }
            StepOutcome::Advanced
            | StepOutcome::NavigatedBack
            | StepOutcome::Redisplayed
            | StepOutcome::TimeExpired => {}
        }
    }

    if session.is_expired() {
        println!("\nTime's up!");
    }

    Ok(session.finish(started.elapsed(), Utc::now()))
}

/// Shared setup for a fresh exam over `questions`: shuffle, prompt for
/// size, time budget and pass condition, run the session, persist it.
pub fn setup_and_run(mut questions: Vec<Question>, store: &AttemptStore) -> Result<()> {
    let mut rng = rand::thread_rng();
    bank::shuffle_answers(&mut questions, &mut rng);

    let count = prompt::read_count(
        &format!("Number of questions (max {}): ", questions.len()),
        questions.len(),
    )?;
    let selected = bank::select_random(&questions, count, &mut rng);
    let minutes = prompt::read_minutes("Exam time (minutes): ")?;
    let pass_condition = prompt::read_pass_condition()?;

    let session = ExamSession::new(selected, minutes, pass_condition)?;
    let attempt = run_session(session)?;
    finish_and_save(attempt, store)
}

/// Show a finished attempt's summary and persist it.
pub fn finish_and_save(attempt: ExamAttempt, store: &AttemptStore) -> Result<()> {
    render::clear_screen();
    render::results_summary(&attempt);

    let path = store.save(&attempt)?;
    println!("\nResults saved to: {}", path.display());
    prompt::pause()?;
    Ok(())
}
