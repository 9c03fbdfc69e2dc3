mod document_template;
mod prompter;
mod text_model;

pub use document_template::DocumentTemplate;
pub use prompter::Prompter;
pub use text_model::{TextModel, TextModelFactory};
