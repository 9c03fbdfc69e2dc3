//! API Facade for the application.
//!
//! Each stage of a fill run is available on its own, wired to the production
//! adapters.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::adapters::{DialoguerPrompter, DocxTemplateEngine, GeminiClientFactory, HttpGeminiClient};
use crate::app::AppContext;
use crate::app::commands::{discover, fill, generate, render};
use crate::app::console::Console;
use crate::ports::TextModel;

pub use crate::app::commands::fill::{FillExit, FillOptions, FillOutcome};
pub use crate::domain::{
    AppError, Credential, Discovery, FieldMapping, GeminiApiConfig, GenerationOutcome,
    GenerationPath, PlaceholderSet,
};

/// List the placeholders declared in a `.docx` template.
pub fn discover_variables(template: &Path) -> Result<Discovery, AppError> {
    discover::execute(template, &DocxTemplateEngine::new())
}

/// Build a Gemini client configured from the environment.
pub fn connect_gemini(credential: &Credential) -> Result<HttpGeminiClient, AppError> {
    HttpGeminiClient::new(credential, &GeminiApiConfig::from_env()?)
}

/// Generate a value for every placeholder without printing progress.
pub fn generate_content<M: TextModel + ?Sized>(
    model: &M,
    instruction: &str,
    placeholders: &PlaceholderSet,
) -> Result<GenerationOutcome, AppError> {
    generate::execute(model, instruction, placeholders, |_| {})
}

/// Render `template` with `mapping` to a timestamped sibling file.
pub fn render_document(template: &Path, mapping: &FieldMapping) -> Result<PathBuf, AppError> {
    render::execute(template, mapping, Local::now().naive_local(), &DocxTemplateEngine::new())
}

/// Run the interactive fill flow on the terminal.
pub fn fill(options: &FillOptions) -> Result<FillOutcome, AppError> {
    let ctx = AppContext::new(
        DocxTemplateEngine::new(),
        DialoguerPrompter::new(),
        GeminiClientFactory::new(GeminiApiConfig::from_env()?),
        Console::detect(),
    );
    fill::execute(&ctx, options)
}
