//! Repairs placeholders that Word split across runs.
//!
//! Typing `{{ ho_ten }}` in Word often yields several `<w:r>` elements, e.g.
//! `{{ ho_` and `ten }}` with formatting or proofing markup in between. Inside a
//! tag span all markup is dropped so the expression text lands in the first
//! run, which keeps the surrounding XML balanced.
//!
//! Entities are decoded so expressions parse, then string literals are
//! escaped again. Rendered values and literals both land in `<w:t>` as XML
//! text, and values are escaped by [`escape_text`] before rendering.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

struct Patterns {
    split_open: Regex,
    split_close: Regex,
    tag_span: Regex,
    markup: Regex,
    string_literal: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        split_open: Regex::new(r"\{(?:<[^>]*>)+([{%#])").expect("split_open pattern must be valid"),
        split_close: Regex::new(r"([}%#])(?:<[^>]*>)+\}")
            .expect("split_close pattern must be valid"),
        tag_span: Regex::new(r"(?s)\{\{.*?\}\}|\{%.*?%\}|\{#.*?#\}")
            .expect("tag_span pattern must be valid"),
        markup: Regex::new(r"<[^>]*>").expect("markup pattern must be valid"),
        string_literal: Regex::new(r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#)
            .expect("string_literal pattern must be valid"),
    })
}

/// Merge split tag spans in one WordprocessingML part.
pub fn normalize_tags(xml: &str) -> String {
    let p = patterns();
    let xml = p.split_open.replace_all(xml, "{$1");
    let xml = p.split_close.replace_all(&xml, "${1}}");
    p.tag_span.replace_all(&xml, |caps: &Captures| clean_span(&caps[0]).into_owned()).into_owned()
}

fn clean_span(span: &str) -> Cow<'_, str> {
    // A span crossing a paragraph boundary is not a placeholder the user typed.
    if span.contains("</w:p>") {
        return Cow::Borrowed(span);
    }

    let text = patterns().markup.replace_all(span, "");
    let text = text
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"");
    let text = unescape_entities(&text);
    Cow::Owned(escape_literals(&text))
}

fn escape_literals(expression: &str) -> String {
    patterns()
        .string_literal
        .replace_all(expression, |caps: &Captures| {
            caps[0].replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
        })
        .into_owned()
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Escape a value for a `<w:t>` element. Newlines become Word line breaks.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\r' => {}
            '\n' => escaped.push_str(r#"</w:t><w:br/><w:t xml:space="preserve">"#),
            _ => escaped.push(ch),
        }
    }
    escaped
}
