//! Menu action: export per-question statistics as CSV.

use anyhow::Result;
use quizdrill_core::config::TrainerConfig;
use quizdrill_core::store::{AttemptStore, ListOrder};
use quizdrill_core::{export, statistics};

use crate::prompt;

pub fn execute(config: &TrainerConfig) -> Result<()> {
    let store = AttemptStore::new(&config.exams_dir);
    let attempts = store.load_all(ListOrder::OldestFirst)?;
    if attempts.is_empty() {
        println!("No completed attempts to export.");
        prompt::pause()?;
        return Ok(());
    }

    let histories = statistics::aggregate_history(&attempts);
    let table = export::build_statistics_table(&histories);
    export::write_csv(&table, &config.export_path)?;

    println!("Statistics exported to: {}", config.export_path.display());
    prompt::pause()?;
    Ok(())
}
