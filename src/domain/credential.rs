//! Gemini API key resolution.

use std::fmt;

use super::AppError;

/// Environment variable consulted when no key is typed in.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Opaque API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Explicit,
    Environment,
}

/// Resolve a key from, in order: explicit input, then the `env_var` looked up
/// through `lookup`. Blank values count as absent at every step.
pub fn resolve_credential<F>(
    explicit: Option<&str>,
    env_var: &str,
    lookup: F,
) -> Result<(Credential, CredentialSource), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = explicit.map(str::trim).filter(|key| !key.is_empty()) {
        return Ok((Credential::new(key), CredentialSource::Explicit));
    }

    lookup(env_var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(|value| (Credential::new(value), CredentialSource::Environment))
        .ok_or_else(|| AppError::CredentialMissing(env_var.to_string()))
}

/// [`resolve_credential`] against the process environment.
pub fn resolve_from_env(
    explicit: Option<&str>,
    env_var: &str,
) -> Result<(Credential, CredentialSource), AppError> {
    resolve_credential(explicit, env_var, |name| std::env::var(name).ok())
}
