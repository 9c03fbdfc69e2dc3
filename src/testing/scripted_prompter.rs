use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter replaying canned answers in order.
///
/// Running out of answers is a `Prompt` error, so a test fails loudly when the
/// driver asks more than expected.
#[derive(Default)]
pub struct ScriptedPrompter {
    lines: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer for the next `input` or `secret` question.
    pub fn line(self, answer: &str) -> Self {
        self.lines.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next_line(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.lines
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        self.next_line(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<String, AppError> {
        self.next_line(prompt)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}
