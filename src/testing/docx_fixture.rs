use std::io::{Cursor, Read, Write};
use std::path::Path;

use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Builds minimal `.docx` packages for tests.
///
/// Each paragraph is a list of runs so tests can reproduce Word splitting a
/// placeholder across `<w:r>` elements.
#[derive(Debug, Clone, Default)]
pub struct DocxFixture {
    paragraphs: Vec<Vec<String>>,
    header: Option<String>,
}

impl DocxFixture {
    pub const STYLES_XML: &'static str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;

    pub fn with_paragraphs(paragraphs: &[&str]) -> Self {
        let mut fixture = Self::default();
        for text in paragraphs {
            fixture = fixture.paragraph_runs(&[*text]);
        }
        fixture
    }

    pub fn paragraph_runs(mut self, runs: &[&str]) -> Self {
        self.paragraphs.push(runs.iter().map(|run| run.to_string()).collect());
        self
    }

    pub fn header(mut self, text: &str) -> Self {
        self.header = Some(text.to_string());
        self
    }

    pub fn document_xml(&self) -> String {
        let body: String = self.paragraphs.iter().map(|runs| paragraph_xml(runs)).collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        )
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut entries = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels".to_string(), ROOT_RELS_XML.to_string()),
            ("word/document.xml".to_string(), self.document_xml()),
            ("word/styles.xml".to_string(), Self::STYLES_XML.to_string()),
        ];
        if let Some(text) = &self.header {
            entries.push((
                "word/header1.xml".to_string(),
                format!(r#"<w:hdr xmlns:w="{W_NS}">{}</w:hdr>"#, paragraph_xml(&[text.clone()])),
            ));
        }

        for (name, content) in entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.to_bytes()).unwrap();
    }

    /// Raw content of one package entry.
    pub fn entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut content).unwrap();
        content
    }

    /// Visible text of `word/document.xml`, one line per paragraph.
    pub fn document_text(bytes: &[u8]) -> String {
        let xml = Self::entry(bytes, "word/document.xml");
        let paragraphs = Regex::new(r"(?s)<w:p>(.*?)</w:p>").unwrap();
        let texts = Regex::new(r"(?s)<w:t[^>]*>(.*?)</w:t>|<w:br/>").unwrap();

        paragraphs
            .captures_iter(&xml)
            .map(|paragraph| {
                texts
                    .captures_iter(&paragraph[1])
                    .map(|m| m.get(1).map_or("\n", |text| text.as_str()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn paragraph_xml(runs: &[String]) -> String {
    let runs: String = runs
        .iter()
        .map(|text| format!(r#"<w:r><w:t xml:space="preserve">{text}</w:t></w:r>"#))
        .collect();
    format!("<w:p>{runs}</w:p>")
}
