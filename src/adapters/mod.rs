pub mod dialoguer_prompter;
pub mod docx;
pub mod gemini_client_http;

pub use dialoguer_prompter::DialoguerPrompter;
pub use docx::DocxTemplateEngine;
pub use gemini_client_http::{GeminiClientFactory, HttpGeminiClient};
