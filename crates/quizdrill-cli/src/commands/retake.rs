//! Menu action: review a saved exam and retake it.

use anyhow::Result;
use quizdrill_core::config::TrainerConfig;
use quizdrill_core::session::ExamSession;
use quizdrill_core::store::{AttemptStore, ListOrder};

use crate::{prompt, render, runner};

pub fn execute(config: &TrainerConfig) -> Result<()> {
    let store = AttemptStore::new(&config.exams_dir);
    let saved = store.list(ListOrder::NewestFirst)?;
    if saved.is_empty() {
        println!("No saved exams found.");
        prompt::pause()?;
        return Ok(());
    }

    loop {
        render::clear_screen();
        println!("Saved exams:");
        render::attempt_list(&saved);

        let choice = prompt::read_line("\nSelect an exam (number) or 'back' to return: ")?;
        if choice.eq_ignore_ascii_case("back") {
            return Ok(());
        }
        let selected = choice
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=saved.len()).contains(n));
        let Some(index) = selected else {
            println!("Invalid choice, please try again.");
            prompt::pause()?;
            continue;
        };

        let attempt = store.load(&saved[index - 1])?;
        render::clear_screen();
        render::attempt_overview(&attempt);

        let action =
            prompt::read_line("\nEnter 'start' to retake this exam or 'back' to return to the list: ")?;
        if action.eq_ignore_ascii_case("start") {
            // A retake is a new attempt: same questions and pass condition,
            // answers re-shuffled and reset.
            let session = ExamSession::from_attempt(&attempt, &mut rand::thread_rng())?;
            let finished = runner::run_session(session)?;
            runner::finish_and_save(finished, &store)?;
            return Ok(());
        }
    }
}
