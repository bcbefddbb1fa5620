//! Gemini API client configuration.

use crate::QueryError;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
        }
    }

    /// Create config from the `GEMINI_API_KEY` environment variable.
    ///
    /// A missing or empty key is a recoverable, user-visible condition,
    /// not a crash.
    pub fn from_env() -> Result<Self, QueryError> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(QueryError::MissingCredential),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("secret-key-value");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key-value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_model() {
        let config = GeminiConfig::new("k");
        assert_eq!(config.model, "gemini-2.0-flash");

        let config = GeminiConfig::new("k").with_model("gemini-2.5-pro");
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
