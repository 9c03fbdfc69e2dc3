use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::{AppError, FieldMapping, derive_output_path};
use crate::ports::DocumentTemplate;

/// Fill `template` with `mapping` into a timestamped sibling file.
///
/// `mapping` must already cover every placeholder; the engine reports a
/// render failure otherwise.
pub fn execute(
    template: &Path,
    mapping: &FieldMapping,
    at: NaiveDateTime,
    engine: &impl DocumentTemplate,
) -> Result<PathBuf, AppError> {
    let output = derive_output_path(template, at);
    engine.render(template, mapping, &output)?;
    Ok(output)
}
