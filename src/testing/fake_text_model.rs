use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Credential};
use crate::ports::{TextModel, TextModelFactory};

/// Scripted text model that records every prompt it receives.
///
/// Batch prompts are recognized by their JSON request; per-field prompts by
/// the quoted field name. Fields without a scripted reply answer
/// `nội dung <field>`.
#[derive(Clone)]
pub struct FakeTextModel {
    pub prompts: Arc<Mutex<Vec<String>>>,
    batch_reply: Result<String, String>,
    field_replies: BTreeMap<String, Result<String, String>>,
}

impl FakeTextModel {
    pub fn new() -> Self {
        Self {
            prompts: Arc::new(Mutex::new(vec![])),
            batch_reply: Ok("Xin lỗi, tôi không thể trả về JSON.".to_string()),
            field_replies: BTreeMap::new(),
        }
    }

    pub fn with_batch_reply(mut self, text: impl Into<String>) -> Self {
        self.batch_reply = Ok(text.into());
        self
    }

    pub fn with_batch_error(mut self, message: impl Into<String>) -> Self {
        self.batch_reply = Err(message.into());
        self
    }

    pub fn with_field_reply(mut self, field: &str, text: impl Into<String>) -> Self {
        self.field_replies.insert(field.to_string(), Ok(text.into()));
        self
    }

    pub fn with_field_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.field_replies.insert(field.to_string(), Err(message.into()));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn batch_requests(&self) -> usize {
        self.prompts().iter().filter(|p| requested_field(p).is_none()).count()
    }

    /// Field names of the per-field requests, in request order.
    pub fn field_requests(&self) -> Vec<String> {
        self.prompts().iter().filter_map(|p| requested_field(p)).map(str::to_string).collect()
    }
}

fn requested_field(prompt: &str) -> Option<&str> {
    let start = prompt.find("trường \"")? + "trường \"".len();
    let len = prompt[start..].find('"')?;
    Some(&prompt[start..start + len])
}

fn api_error(message: &str) -> AppError {
    AppError::GeminiApiError { message: message.to_string(), status: Some(500) }
}

impl TextModel for FakeTextModel {
    fn generate_text(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match requested_field(prompt) {
            None => self.batch_reply.clone().map_err(|m| api_error(&m)),
            Some(field) => match self.field_replies.get(field) {
                Some(reply) => reply.clone().map_err(|m| api_error(&m)),
                None => Ok(format!("nội dung {}", field)),
            },
        }
    }
}

pub struct FakeTextModelFactory {
    pub model: FakeTextModel,
    pub credentials: Arc<Mutex<Vec<String>>>,
}

impl FakeTextModelFactory {
    pub fn new(model: FakeTextModel) -> Self {
        Self { model, credentials: Arc::new(Mutex::new(vec![])) }
    }

    pub fn credentials(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }
}

impl TextModelFactory for FakeTextModelFactory {
    fn connect(&self, credential: &Credential) -> Result<Box<dyn TextModel>, AppError> {
        self.credentials.lock().unwrap().push(credential.expose().to_string());
        Ok(Box::new(self.model.clone()))
    }
}
