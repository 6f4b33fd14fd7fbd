//! quizdrill CLI — the user-facing interactive trainer.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod commands;
mod input;
mod menu;
mod prompt;
mod render;
mod runner;

#[derive(Parser)]
#[command(name = "quizdrill", version, about = "Terminal multiple-choice exam trainer")]
struct Cli {
    /// Question bank JSON file
    #[arg(long)]
    bank: Option<PathBuf>,

    /// Directory completed attempts are stored in
    #[arg(long)]
    exams_dir: Option<PathBuf>,

    /// Where the CSV statistics export is written
    #[arg(long)]
    export: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = quizdrill_core::config::load_config_from(cli.config.as_deref())?;
    if let Some(bank) = cli.bank {
        config.bank_path = bank;
    }
    if let Some(dir) = cli.exams_dir {
        config.exams_dir = dir;
    }
    if let Some(export) = cli.export {
        config.export_path = export;
    }

    menu::run(&config)
}
