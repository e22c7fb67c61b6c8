use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing OPENAI_API_KEY")]
    MissingApiKey,
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Knobs sent with every completion call. Fixed per process, never taken from a request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub generation: GenerationSettings,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("generation", &self.generation)
            .finish()
    }
}

impl ServiceConfig {
    /// Reads the process environment. Call once at startup, after loading `.env`.
    ///
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_MODEL` (default `gpt-4`)
    /// - `OPENAI_BASE_URL` (default `https://api.openai.com/v1`)
    /// - `BUSINESS_CASE_TEMPERATURE` (default 0.7)
    /// - `BUSINESS_CASE_MAX_TOKENS` (default 2000)
    /// - `BUSINESS_CASE_TIMEOUT_SECS` (default 120)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = get("OPENAI_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let defaults = GenerationSettings::default();
        let temperature: f64 = parse_or("BUSINESS_CASE_TEMPERATURE", get, defaults.temperature)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(invalid("BUSINESS_CASE_TEMPERATURE", get));
        }
        let timeout_secs: u64 = parse_or("BUSINESS_CASE_TIMEOUT_SECS", get, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(invalid("BUSINESS_CASE_TIMEOUT_SECS", get));
        }
        let generation = GenerationSettings {
            temperature,
            max_tokens: parse_or("BUSINESS_CASE_MAX_TOKENS", get, defaults.max_tokens)?,
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url,
            generation,
        })
    }
}

fn invalid<G>(key: &'static str, get: G) -> ConfigError
where
    G: Fn(&str) -> Option<String>,
{
    ConfigError::Invalid {
        key,
        value: get(key).unwrap_or_default(),
    }
}

fn parse_or<T, G>(key: &'static str, get: G, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
