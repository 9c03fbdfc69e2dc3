//! Gemini API configuration.

use url::Url;

use super::AppError;

pub const API_URL_ENV: &str = "DOCFILL_GEMINI_API_URL";
pub const MODEL_ENV: &str = "DOCFILL_GEMINI_MODEL";
pub const TIMEOUT_ENV: &str = "DOCFILL_GEMINI_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Sampling parameters sent with every request.
///
/// Low temperature keeps short administrative text close to deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    pub const FORM_FILLING: GenerationParams =
        GenerationParams { temperature: 0.3, top_p: 1.0, top_k: 40, max_output_tokens: 4096 };
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::FORM_FILLING
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiApiConfig {
    /// Base URL up to and including the API version segment.
    pub api_url: Url,
    /// Model name used in `models/{model}:generateContent`.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub generation: GenerationParams,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            generation: GenerationParams::default(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}

impl GeminiApiConfig {
    /// Defaults overridden by `DOCFILL_GEMINI_*` variables from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(API_URL_ENV)) {
            config.api_url = Url::parse(&raw).map_err(|e| {
                AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
            })?;
        }
        if let Some(model) = non_blank(lookup(MODEL_ENV)) {
            config.model = model;
        }
        if let Some(raw) = non_blank(lookup(TIMEOUT_ENV)) {
            config.timeout_secs = raw.parse::<u64>().map_err(|e| {
                AppError::config_error(format!("Invalid {} '{}': {}", TIMEOUT_ENV, raw, e))
            })?;
        }

        Ok(config)
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let raw = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&raw)
            .map_err(|e| AppError::config_error(format!("Invalid Gemini endpoint '{}': {}", raw, e)))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
