mod docx_fixture;
mod fake_text_model;
mod scripted_prompter;

pub use docx_fixture::DocxFixture;
pub use fake_text_model::{FakeTextModel, FakeTextModelFactory};
pub use scripted_prompter::ScriptedPrompter;
