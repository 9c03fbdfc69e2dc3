//! Colored, prefixed terminal output.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::domain::{FieldMapping, PlaceholderSet};

/// Writes user-facing messages to stdout.
///
/// Colors are disabled when stdout is not a terminal or `NO_COLOR` is set.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::detect()
    }
}

impl Console {
    pub fn detect() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn header(&self) {
        let rule = "=".repeat(50);
        if self.color {
            println!("\n{}", rule.magenta().bold());
            println!("{}", "   DOCFILL · điền form Word bằng Gemini".magenta().bold());
            println!("{}", rule.magenta().bold());
        } else {
            println!("\n{}\n   DOCFILL · điền form Word bằng Gemini\n{}", rule, rule);
        }
    }

    pub fn info(&self, message: &str) {
        if self.color {
            println!("{}", message.blue());
        } else {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        let line = format!("✅ {}", message);
        if self.color {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    pub fn warn(&self, message: &str) {
        let line = format!("⚠️  {}", message);
        if self.color {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }

    pub fn error(&self, message: &str) {
        let line = format!("❌ {}", message);
        if self.color {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }

    pub fn hint(&self, message: &str) {
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
    }

    pub fn placeholders(&self, placeholders: &PlaceholderSet) {
        self.info("\n📋 Các biến tìm được:");
        for (index, name) in placeholders.iter().enumerate() {
            println!("  {}. {{{{ {} }}}}", index + 1, name);
        }
    }

    pub fn mapping(&self, mapping: &FieldMapping) {
        self.info("\n📋 Nội dung đã viết:");
        for (name, value) in mapping.iter() {
            let label = format!("{{{{ {} }}}} =", name);
            if self.color {
                println!("  {} {}", label.bold(), value);
            } else {
                println!("  {} {}", label, value);
            }
        }
    }
}
