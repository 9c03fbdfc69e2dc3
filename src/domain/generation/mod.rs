//! Prompt construction and response classification for content generation.

mod batch_response;
mod prompt;

pub use batch_response::{BatchResponse, extract_structured_region};
pub use prompt::{FieldPromptKind, LANGUAGE_POLICY, batch_prompt, field_prompt};

use crate::domain::field_mapping::FieldMapping;

/// Which tiers the generator needed to complete the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPath {
    /// The batch answer covered every field.
    Batch,
    /// The batch answer parsed; `fields` were requested individually.
    Backfilled { fields: Vec<String> },
    /// The batch answer was unusable; every field was requested individually.
    PerField,
}

/// A field whose individual request failed and now holds the error marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// Completed mapping plus how it was obtained.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub mapping: FieldMapping,
    pub path: GenerationPath,
    pub failures: Vec<FieldFailure>,
}

impl GenerationOutcome {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}
