//! Blocking line-based operator interaction.
//!
//! The prompt is a trait so the module-number loop (and the OAuth code
//! entry on first run) can be driven by a scripted input source in tests
//! instead of a live terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

pub trait Prompt {
    /// Ask a question and return the operator's answer, trimmed.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Interactive prompt reading from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{} ", question);
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read operator input")?;
        Ok(line.trim().to_string())
    }
}

/// Ask for the module number until the operator enters an integer.
///
/// Non-numeric input is reported and the question repeats; there is no
/// attempt limit. The sign is discarded.
pub fn ask_module_number(prompt: &mut impl Prompt) -> Result<u64> {
    loop {
        let answer = prompt.ask("Module number:")?;
        match answer.parse::<i64>() {
            Ok(n) => return Ok(n.unsigned_abs()),
            Err(_) => eprintln!("'{}' is not a number, try again", answer),
        }
    }
}
