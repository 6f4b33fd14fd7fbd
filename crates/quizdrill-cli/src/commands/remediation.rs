//! Menu action: practice questions with low historical accuracy.

use anyhow::Result;
use quizdrill_core::config::TrainerConfig;
use quizdrill_core::statistics;
use quizdrill_core::store::{AttemptStore, ListOrder};

use crate::{prompt, runner};

pub fn execute(config: &TrainerConfig) -> Result<()> {
    let store = AttemptStore::new(&config.exams_dir);
    let attempts = store.load_all(ListOrder::OldestFirst)?;

    let threshold = prompt::read_threshold("Maximum correct-answer rate to include (0-100): ")?;
    let questions = statistics::low_accuracy_questions(&attempts, threshold);
    if questions.is_empty() {
        println!("No questions below that accuracy threshold.");
        prompt::pause()?;
        return Ok(());
    }

    runner::setup_and_run(questions, &store)
}
