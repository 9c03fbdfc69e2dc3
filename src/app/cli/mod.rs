//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, FillOptions};
use crate::app::console::Console;

#[derive(Parser)]
#[command(name = "docfill")]
#[command(version)]
#[command(
    about = "Fill .docx form templates with Vietnamese text generated by Gemini",
    long_about = None
)]
struct Cli {
    /// Template .docx file (asked interactively when omitted)
    template: Option<PathBuf>,
    /// What the form should say, e.g. "Viết đơn xin nghỉ 3 ngày..."
    #[arg(short, long)]
    prompt: Option<String>,
    /// Gemini API key (falls back to GOOGLE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
    /// Fill the form without asking for approval
    #[arg(short, long)]
    yes: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let options = FillOptions {
        template: cli.template,
        instruction: cli.prompt,
        api_key: cli.api_key,
        assume_yes: cli.yes,
        ..FillOptions::default()
    };

    match api::fill(&options) {
        Ok(outcome) => tracing::debug!(?outcome, "run finished"),
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            Console::detect().error(&e.to_string());
            std::process::exit(1);
        }
    }
}
