//! Three-tier content generation.
//!
//! 1. One batch request asking for every field as a JSON object.
//! 2. Fields the batch answer left out are requested one by one.
//! 3. If the batch answer holds no usable object, every field is requested
//!    one by one.
//!
//! Per-field failures are contained: the field gets
//! [`NOT_GENERATED_MARKER`] and the run continues.

use crate::domain::generation::{
    BatchResponse, FieldPromptKind, batch_prompt, field_prompt,
};
use crate::domain::{
    AppError, FieldFailure, FieldMapping, GenerationOutcome, GenerationPath,
    NOT_GENERATED_MARKER, PlaceholderSet,
};
use crate::ports::TextModel;

/// Progress notifications for the caller's display.
#[derive(Debug)]
pub enum GenerationEvent<'a> {
    BatchRequested { fields: usize },
    Backfilling { missing: &'a [String] },
    FallingBack,
    FieldRequested { field: &'a str },
    FieldFailed { field: &'a str, error: &'a AppError },
}

/// Produce a value for every placeholder.
///
/// A failing batch request aborts with its error. Once the batch answer is in
/// hand the returned mapping always covers `placeholders`.
pub fn execute<M, E>(
    model: &M,
    instruction: &str,
    placeholders: &PlaceholderSet,
    mut on_event: E,
) -> Result<GenerationOutcome, AppError>
where
    M: TextModel + ?Sized,
    E: FnMut(GenerationEvent<'_>),
{
    on_event(GenerationEvent::BatchRequested { fields: placeholders.len() });
    let answer = model.generate_text(&batch_prompt(instruction, placeholders))?;

    let mut failures = Vec::new();
    let (mapping, path) = match BatchResponse::classify(&answer, placeholders) {
        BatchResponse::Complete(mapping) => {
            tracing::debug!(fields = mapping.len(), "batch answer complete");
            (mapping, GenerationPath::Batch)
        }
        BatchResponse::Partial { mut found, missing } => {
            tracing::info!(missing = missing.len(), "backfilling fields missing from batch answer");
            on_event(GenerationEvent::Backfilling { missing: &missing });
            fill_individually(
                model,
                instruction,
                missing.iter().map(String::as_str),
                FieldPromptKind::Backfill,
                &mut found,
                &mut failures,
                &mut on_event,
            );
            (found, GenerationPath::Backfilled { fields: missing })
        }
        BatchResponse::Unstructured => {
            tracing::info!("batch answer unstructured; requesting every field");
            on_event(GenerationEvent::FallingBack);
            let mut mapping = FieldMapping::new();
            fill_individually(
                model,
                instruction,
                placeholders.iter(),
                FieldPromptKind::Fallback,
                &mut mapping,
                &mut failures,
                &mut on_event,
            );
            (mapping, GenerationPath::PerField)
        }
    };

    Ok(GenerationOutcome { mapping, path, failures })
}

fn fill_individually<'f, M, E>(
    model: &M,
    instruction: &str,
    fields: impl Iterator<Item = &'f str>,
    kind: FieldPromptKind,
    mapping: &mut FieldMapping,
    failures: &mut Vec<FieldFailure>,
    on_event: &mut E,
) where
    M: TextModel + ?Sized,
    E: FnMut(GenerationEvent<'_>),
{
    for field in fields {
        on_event(GenerationEvent::FieldRequested { field });

        let result = model
            .generate_text(&field_prompt(instruction, field, kind))
            .and_then(|text| non_empty(field, text));

        match result {
            Ok(value) => mapping.insert(field, value),
            Err(error) => {
                tracing::warn!(field, error = %error, "field not generated");
                on_event(GenerationEvent::FieldFailed { field, error: &error });
                failures.push(FieldFailure { field: field.to_string(), message: error.to_string() });
                mapping.insert(field, NOT_GENERATED_MARKER);
            }
        }
    }
}

fn non_empty(field: &str, text: String) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::GeminiApiError {
            message: format!("empty response for field '{}'", field),
            status: None,
        });
    }
    Ok(trimmed.to_string())
}
