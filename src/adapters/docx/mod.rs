//! `.docx` template engine.
//!
//! Placeholders use Jinja syntax (`{{ name }}`) typed directly into the
//! document body, headers, footers, footnotes or endnotes.

mod expressions;
mod markup;
mod package;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::domain::{AppError, FieldMapping};
use crate::ports::DocumentTemplate;

use package::DocxPackage;

/// Discovers and fills placeholders in Word documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTemplateEngine;

impl DocxTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentTemplate for DocxTemplateEngine {
    fn placeholders(&self, template: &Path) -> Result<BTreeSet<String>, AppError> {
        let package = DocxPackage::open(template)?;
        let mut names = BTreeSet::new();

        for part in package.template_parts()? {
            let normalized = markup::normalize_tags(&part.xml);
            names.extend(expressions::undeclared_names(&part.name, &normalized)?);
        }

        tracing::debug!(template = %template.display(), count = names.len(), "placeholders discovered");
        Ok(names)
    }

    fn render(
        &self,
        template: &Path,
        mapping: &FieldMapping,
        output: &Path,
    ) -> Result<(), AppError> {
        if output == template {
            return Err(AppError::Render(format!(
                "refusing to overwrite the template {}",
                template.display()
            )));
        }

        let package = DocxPackage::open(template)?;
        let values: BTreeMap<String, String> = mapping
            .iter()
            .map(|(name, value)| (name.to_string(), markup::escape_text(value)))
            .collect();

        let bytes = package.rewrite(|part| {
            let normalized = markup::normalize_tags(&part.xml);
            expressions::render_part(&part.name, &normalized, &values)
        })?;

        fs::write(output, bytes).map_err(|e| {
            AppError::Render(format!("cannot write {}: {}", output.display(), e))
        })?;

        tracing::info!(output = %output.display(), fields = mapping.len(), "document rendered");
        Ok(())
    }
}
