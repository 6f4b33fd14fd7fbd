//! Top-level interactive menu loop.

use anyhow::Result;
use quizdrill_core::config::TrainerConfig;

use crate::{commands, prompt, render};

/// Run the menu until the user exits (or stdin closes).
pub fn run(config: &TrainerConfig) -> Result<()> {
    loop {
        render::clear_screen();
        println!("Welcome to quizdrill!");
        println!();
        println!("1. Take a new exam");
        println!("2. Retake a saved exam");
        println!("3. Export result statistics");
        println!("4. Practice low-accuracy questions");
        println!("5. Exit");

        let choice = prompt::read_line("\nYour choice: ")?;
        let outcome = match choice.as_str() {
            "1" => commands::new_exam::execute(config),
            "2" => commands::retake::execute(config),
            "3" => commands::export_stats::execute(config),
            "4" => commands::remediation::execute(config),
            "5" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!("Invalid choice, please try again.");
                prompt::pause()?;
                continue;
            }
        };

        // A failed operation reports and falls back to the menu; only the
        // explicit exit above (or a closed stdin) leaves the loop.
        if let Err(e) = outcome {
            eprintln!("Error: {e:#}");
            prompt::pause()?;
        }
    }
}
