//! Shared testing utilities for docfill CLI and library tests.

use assert_cmd::Command;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding templates and rendered outputs.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `docfill` binary in the work directory.
    ///
    /// Credentials and logging settings from the developer's shell are removed.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("docfill").expect("Failed to locate docfill binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GOOGLE_API_KEY")
            .env_remove("DOCFILL_LOG")
            .env_remove("DOCFILL_GEMINI_MODEL")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Write a one-run-per-paragraph `.docx` template into the work directory.
    pub fn write_template(&self, name: &str, paragraphs: &[&str]) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, docx_bytes(paragraphs)).expect("Failed to write template");
        path
    }

    /// Rendered documents derived from `stem`, sorted by name.
    pub fn outputs(&self, stem: &str) -> Vec<PathBuf> {
        let prefix = format!("{}_", stem);
        let mut found: Vec<PathBuf> = fs::read_dir(self.work_dir())
            .expect("Failed to list work directory")
            .map(|entry| entry.expect("Failed to read entry").path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".docx"))
            })
            .collect();
        found.sort();
        found
    }
}

/// Minimal WordprocessingML package with one run per paragraph.
#[allow(dead_code)]
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Visible text of a rendered document's body, one line per paragraph.
#[allow(dead_code)]
pub fn document_text(path: &Path) -> String {
    let bytes = fs::read(path).expect("Failed to read rendered document");
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("Rendered file is not a zip");
    let mut xml = String::new();
    archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();

    xml.split("</w:p>")
        .filter(|chunk| chunk.contains("<w:p>"))
        .map(|chunk| {
            let mut text = String::new();
            let mut rest = chunk;
            while let Some(start) = rest.find("<w:t") {
                let after_tag = &rest[start..];
                let Some(open_end) = after_tag.find('>') else { break };
                let content = &after_tag[open_end + 1..];
                let Some(close) = content.find("</w:t>") else { break };
                text.push_str(&content[..close]);
                rest = &content[close..];
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A `generateContent` success body whose single candidate says `text`.
#[allow(dead_code)]
pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
