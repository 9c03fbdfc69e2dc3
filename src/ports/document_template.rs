//! Template document engine port definition.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::{AppError, FieldMapping};

/// Port for discovering and filling placeholders in a template document.
pub trait DocumentTemplate {
    /// Names the template references but never binds itself.
    fn placeholders(&self, template: &Path) -> Result<BTreeSet<String>, AppError>;

    /// Substitute `mapping` into `template` and write the result to `output`.
    ///
    /// A placeholder missing from `mapping` is a render failure.
    fn render(&self, template: &Path, mapping: &FieldMapping, output: &Path)
    -> Result<(), AppError>;
}
