pub mod configuration;
pub mod credential;
pub mod error;
pub mod field_mapping;
pub mod generation;
pub mod output_path;
pub mod placeholders;

pub use configuration::{GeminiApiConfig, GenerationParams};
pub use credential::{API_KEY_ENV, Credential, CredentialSource};
pub use error::AppError;
pub use field_mapping::{FieldMapping, NOT_GENERATED_MARKER};
pub use generation::{FieldFailure, GenerationOutcome, GenerationPath};
pub use output_path::derive_output_path;
pub use placeholders::{Discovery, PlaceholderSet};
