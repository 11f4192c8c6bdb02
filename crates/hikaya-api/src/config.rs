//! Server configuration read from the environment.

use std::net::SocketAddr;

use hikaya_openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use hikaya_story::application::command_handlers::{DEFAULT_MAX_TOKENS, GenerationSettings};

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Provider credential. `None` when unset or blank.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Upper bound on generated tokens per story.
    pub max_tokens: u32,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `STORY_MAX_TOKENS` is invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16` or
    /// `STORY_MAX_TOKENS` is not a positive `u32`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        let max_tokens = match get("STORY_MAX_TOKENS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(AppError::Config(
                        "STORY_MAX_TOKENS must be greater than zero".into(),
                    ));
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "STORY_MAX_TOKENS must be a positive integer: {e}"
                    )));
                }
            },
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_tokens,
        })
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Settings handed to the story handler.
    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            max_tokens: self.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.generation_settings(), GenerationSettings::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1"),
            ("STORY_MAX_TOKENS", "500"),
        ])
        .unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.generation_settings().max_tokens, 500);
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();

        assert_eq!(config.openai_api_key, None);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = config_from(&[("PORT", "70000")]).unwrap_err();

        assert!(matches!(err, AppError::Config(msg) if msg.starts_with("PORT")));
    }

    #[test]
    fn test_zero_max_tokens_is_config_error() {
        let err = config_from(&[("STORY_MAX_TOKENS", "0")]).unwrap_err();

        assert!(matches!(err, AppError::Config(msg) if msg.contains("greater than zero")));
    }

    #[test]
    fn test_non_numeric_max_tokens_is_config_error() {
        assert!(config_from(&[("STORY_MAX_TOKENS", "lots")]).is_err());
    }
}
