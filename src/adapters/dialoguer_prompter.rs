//! Terminal prompts via dialoguer.
//!
//! When stdin is not a terminal (piped input, scripted runs) dialoguer refuses
//! to prompt; answers are then read line by line from stdin instead.

use std::io::{self, BufRead, ErrorKind, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Error as DialoguerError, Input, Password};

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        resolve(prompt, result)
    }

    fn secret(&self, prompt: &str) -> Result<String, AppError> {
        let result = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact();
        resolve(prompt, result)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        let result = Confirm::with_theme(&self.theme).with_prompt(prompt).default(false).interact();
        match result {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::NotConnected => {
                Ok(is_yes(&read_stdin_line(prompt, "(y/n)")?))
            }
            Err(err) => Err(prompt_error(prompt, err)),
        }
    }
}

fn resolve(prompt: &str, result: Result<String, DialoguerError>) -> Result<String, AppError> {
    match result {
        Ok(value) => Ok(value.trim().to_string()),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::NotConnected => {
            read_stdin_line(prompt, "")
        }
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Prompt("cancelled".to_string()))
        }
        Err(err) => Err(prompt_error(prompt, err)),
    }
}

fn prompt_error(prompt: &str, err: DialoguerError) -> AppError {
    AppError::Prompt(format!("Failed to read '{}': {}", prompt, err))
}

fn read_stdin_line(prompt: &str, hint: &str) -> Result<String, AppError> {
    let mut stdout = io::stdout();
    if hint.is_empty() {
        write!(stdout, "{}: ", prompt)?;
    } else {
        write!(stdout, "{} {}: ", prompt, hint)?;
    }
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    println!();
    Ok(line.trim().to_string())
}

/// Accepts `y`/`yes` and the Vietnamese `c`/`có`, case-insensitively.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "c" | "có")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers_are_recognized() {
        for answer in ["y", "Y", " yes ", "c", "Có"] {
            assert!(is_yes(answer), "{answer:?} should be yes");
        }
        for answer in ["", "n", "no", "không", "yy"] {
            assert!(!is_yes(answer), "{answer:?} should be no");
        }
    }
}
