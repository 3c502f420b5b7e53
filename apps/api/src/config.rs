use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    /// Request body limit for `/analyze` uploads.
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            port: env_or("PORT", DEFAULT_PORT)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses `key` if set, otherwise returns `default`.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let port: u16 = env_or("SKILLSYNC_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("SKILLSYNC_TEST_UPLOAD_LIMIT", " 2048 ");
        let limit: usize = env_or("SKILLSYNC_TEST_UPLOAD_LIMIT", 1).unwrap();
        assert_eq!(limit, 2048);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("SKILLSYNC_TEST_BAD_PORT", "not-a-port");
        let err = env_or::<u16>("SKILLSYNC_TEST_BAD_PORT", 5000).unwrap_err();
        assert!(err.to_string().contains("SKILLSYNC_TEST_BAD_PORT"));
    }

    #[test]
    fn test_require_env_names_missing_key() {
        let err = require_env("SKILLSYNC_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("SKILLSYNC_TEST_DEFINITELY_UNSET"));
    }
}
