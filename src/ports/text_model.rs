//! Generative text service port definition.

use crate::domain::{AppError, Credential};

/// Port for a remote text-generation model.
///
/// One call is one blocking request. The returned text is free-form even
/// when the prompt asks for structure.
pub trait TextModel {
    fn generate_text(&self, prompt: &str) -> Result<String, AppError>;
}

/// Builds a [`TextModel`] once the credential is known.
pub trait TextModelFactory {
    fn connect(&self, credential: &Credential) -> Result<Box<dyn TextModel>, AppError>;
}
