use std::path::Path;

use crate::domain::{AppError, Discovery};
use crate::ports::DocumentTemplate;

/// Scan `template` for placeholders.
///
/// A missing file fails before the engine is consulted.
pub fn execute(template: &Path, engine: &impl DocumentTemplate) -> Result<Discovery, AppError> {
    if !template.is_file() {
        return Err(AppError::TemplateNotFound(template.display().to_string()));
    }

    let names = engine.placeholders(template)?;
    Ok(Discovery::from_names(names))
}
