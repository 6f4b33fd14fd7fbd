//! Menu action: take a new exam from the question bank.

use anyhow::Result;
use quizdrill_core::config::TrainerConfig;
use quizdrill_core::store::{AttemptStore, ListOrder};
use quizdrill_core::{bank, statistics};

use crate::{prompt, runner};

pub fn execute(config: &TrainerConfig) -> Result<()> {
    let store = AttemptStore::new(&config.exams_dir);
    let mut questions = bank::load_bank(&config.bank_path)?;

    for warning in bank::validate_bank(&questions) {
        tracing::warn!("bank: {}", warning.message);
    }

    if prompt::read_yes_no("Skip questions already answered in earlier attempts? (y/n): ")? {
        let seen = statistics::seen_question_ids(&store.load_all(ListOrder::OldestFirst)?);
        questions.retain(|q| !seen.contains(&q.id));
    }

    if questions.is_empty() {
        println!("No new questions to practice.");
        prompt::pause()?;
        return Ok(());
    }

    runner::setup_and_run(questions, &store)
}
