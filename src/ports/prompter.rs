//! Interactive input port definition.

use crate::domain::AppError;

/// Port for questions asked of the user.
pub trait Prompter {
    /// Free-text line; may be empty.
    fn input(&self, prompt: &str) -> Result<String, AppError>;

    /// Hidden line for secrets; may be empty.
    fn secret(&self, prompt: &str) -> Result<String, AppError>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}
