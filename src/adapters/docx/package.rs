//! Reading and rewriting the zip package behind a `.docx` file.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::AppError;

/// An XML part that may contain placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePart {
    pub name: String,
    pub xml: String,
}

/// Whether a package entry is one of the text-bearing WordprocessingML parts.
pub fn is_template_part(name: &str) -> bool {
    static PARTS: OnceLock<Regex> = OnceLock::new();
    PARTS
        .get_or_init(|| {
            Regex::new(r"^word/(document|header\d*|footer\d*|footnotes|endnotes)\.xml$")
                .expect("Template part pattern must be valid")
        })
        .is_match(name)
}

/// Opened template package kept in memory.
pub struct DocxPackage {
    bytes: Vec<u8>,
}

impl DocxPackage {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::TemplateNotFound(path.display().to_string()));
        }
        let bytes = fs::read(path)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AppError> {
        let package = Self { bytes };
        let has_document = package.archive()?.index_for_name("word/document.xml").is_some();
        if !has_document {
            return Err(AppError::Template("word/document.xml is missing".to_string()));
        }
        Ok(package)
    }

    fn archive(&self) -> Result<ZipArchive<Cursor<&[u8]>>, AppError> {
        ZipArchive::new(Cursor::new(self.bytes.as_slice()))
            .map_err(|e| AppError::Template(format!("not a .docx package: {}", e)))
    }

    /// All template parts in archive order.
    pub fn template_parts(&self) -> Result<Vec<TemplatePart>, AppError> {
        let mut archive = self.archive()?;
        let mut parts = Vec::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();
            if !is_template_part(&name) {
                continue;
            }
            let mut xml = String::new();
            entry
                .read_to_string(&mut xml)
                .map_err(|e| AppError::Template(format!("{} is not UTF-8 XML: {}", name, e)))?;
            parts.push(TemplatePart { name, xml });
        }

        Ok(parts)
    }

    /// Rebuild the package, passing each template part through `transform` and
    /// copying every other entry unchanged.
    pub fn rewrite<F>(&self, mut transform: F) -> Result<Vec<u8>, AppError>
    where
        F: FnMut(&TemplatePart) -> Result<String, AppError>,
    {
        let mut archive = self.archive()?;
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for index in 0..archive.len() {
            let name = archive.by_index_raw(index)?.name().to_string();

            if is_template_part(&name) {
                let mut xml = String::new();
                archive
                    .by_index(index)?
                    .read_to_string(&mut xml)
                    .map_err(|e| AppError::Template(format!("{} is not UTF-8 XML: {}", name, e)))?;
                let rendered = transform(&TemplatePart { name: name.clone(), xml })?;

                writer.start_file(name.as_str(), options)?;
                writer.write_all(rendered.as_bytes())?;
            } else {
                writer.raw_copy_file(archive.by_index_raw(index)?)?;
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
