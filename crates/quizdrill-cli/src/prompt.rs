//! Blocking line-input helpers.
//!
//! Invalid input re-prompts locally and is never fatal; a closed stdin
//! surfaces as an error so the menu loop can wind down instead of spinning.

use std::io::{self, BufRead, Write};

use quizdrill_core::model::PassCondition;

/// Print `prompt`, read one line, return it trimmed.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

pub fn pause() -> io::Result<()> {
    read_line("\nPress Enter to continue.").map(|_| ())
}

/// Ask for a question count, clamped to the available number.
pub fn read_count(prompt: &str, max: usize) -> io::Result<usize> {
    loop {
        match read_line(prompt)?.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n.min(max)),
            _ => println!("Please enter a number between 1 and {max}."),
        }
    }
}

/// Ask for a time budget in whole minutes.
pub fn read_minutes(prompt: &str) -> io::Result<u64> {
    loop {
        match read_line(prompt)?.parse::<u64>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => println!("Please enter a number of minutes."),
        }
    }
}

/// Ask for a pass condition until it parses.
pub fn read_pass_condition() -> io::Result<PassCondition> {
    loop {
        match read_line("Pass condition (e.g. 70% or 7 questions): ")?.parse() {
            Ok(condition) => return Ok(condition),
            Err(e) => println!("{e}"),
        }
    }
}

/// Ask for an accuracy threshold between 0 and 100.
pub fn read_threshold(prompt: &str) -> io::Result<f64> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(t) if (0.0..=100.0).contains(&t) => return Ok(t),
            _ => println!("Please enter a percentage between 0 and 100."),
        }
    }
}

pub fn read_yes_no(prompt: &str) -> io::Result<bool> {
    loop {
        match read_line(prompt)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
