use crate::app::console::Console;
use crate::ports::{DocumentTemplate, Prompter, TextModelFactory};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: DocumentTemplate, P: Prompter, F: TextModelFactory> {
    templates: T,
    prompter: P,
    models: F,
    console: Console,
}

impl<T: DocumentTemplate, P: Prompter, F: TextModelFactory> AppContext<T, P, F> {
    /// Create a new application context.
    pub fn new(templates: T, prompter: P, models: F, console: Console) -> Self {
        Self { templates, prompter, models, console }
    }

    /// Get a reference to the document template engine.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the text model factory.
    pub fn models(&self) -> &F {
        &self.models
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}
