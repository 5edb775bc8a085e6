use std::fmt;
use std::time::Duration;

use crate::application::errors::AppError;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-change-me";
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const PEXELS_API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Settings {
    pub secret_key: String,
    anthropic_api_key: Option<String>,
    pexels_api_key: Option<String>,
    /// `Cache-Control` max-age for static assets. Zero keeps them no-store
    /// like every other response.
    pub static_max_age: Duration,
}

impl Settings {
    pub fn new(
        secret_key: String,
        anthropic_api_key: Option<String>,
        pexels_api_key: Option<String>,
        static_max_age: Duration,
    ) -> Self {
        Self {
            secret_key,
            anthropic_api_key: normalize_key(anthropic_api_key),
            pexels_api_key: normalize_key(pexels_api_key),
            static_max_age,
        }
    }

    pub fn anthropic_api_key(&self) -> Result<&str, AppError> {
        self.anthropic_api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration(ANTHROPIC_API_KEY_VAR))
    }

    pub fn pexels_api_key(&self) -> Result<&str, AppError> {
        self.pexels_api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration(PEXELS_API_KEY_VAR))
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_KEY.to_string(), None, None, Duration::ZERO)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &"<redacted>")
            .field("anthropic_api_key", &self.anthropic_api_key.as_ref().map(|_| "<redacted>"))
            .field("pexels_api_key", &self.pexels_api_key.as_ref().map(|_| "<redacted>"))
            .field("static_max_age", &self.static_max_age)
            .finish()
    }
}

/// An empty or whitespace-only key counts as unset.
fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
