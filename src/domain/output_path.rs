//! Output document naming.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// `strftime` layout of the suffix; always 15 characters.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const OUTPUT_EXTENSION: &str = "docx";

/// `<dir>/<stem>_<YYYYmmdd_HHMMSS>.docx` next to the template.
///
/// Renders within the same wall-clock second produce the same name.
pub fn derive_output_path(template: &Path, at: NaiveDateTime) -> PathBuf {
    let stem = template
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = format!("{}_{}.{}", stem, at.format(TIMESTAMP_FORMAT), OUTPUT_EXTENSION);

    match template.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
