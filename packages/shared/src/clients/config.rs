use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::clients::errors::config_errors::ConfigError;
use crate::services::prompt_service::PromptStyle;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "LLM_MODEL";
pub const MAX_TOKENS_VAR: &str = "LLM_MAX_TOKENS";
pub const TEMPERATURE_VAR: &str = "LLM_TEMPERATURE";
pub const TIMEOUT_VAR: &str = "LLM_TIMEOUT_SECS";
pub const PROMPT_STYLE_VAR: &str = "LLM_PROMPT_STYLE";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the completion service, built once at startup.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
    pub prompt_style: PromptStyle,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("prompt_style", &self.prompt_style)
            .finish()
    }
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        CompletionConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: PromptStyle::default().default_temperature(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompt_style: PromptStyle::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    ///
    /// Without `LLM_TEMPERATURE` the temperature follows the prompt style.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let mut config = CompletionConfig::new(api_key);

        if let Some(raw) = get(PROMPT_STYLE_VAR) {
            config.prompt_style = parse_var(PROMPT_STYLE_VAR, &raw)?;
            config.temperature = config.prompt_style.default_temperature();
        }

        if let Some(base_url) = get(BASE_URL_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = get(MAX_TOKENS_VAR) {
            config.max_tokens = parse_var(MAX_TOKENS_VAR, &raw)?;
        }
        if let Some(raw) = get(TEMPERATURE_VAR) {
            let temperature: f32 = parse_var(TEMPERATURE_VAR, &raw)?;
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::InvalidVar {
                    name: TEMPERATURE_VAR,
                    reason: format!("{} is outside 0.0..=2.0", temperature),
                });
            }
            config.temperature = temperature;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs: u64 = parse_var(TIMEOUT_VAR, &raw)?;
            if secs == 0 {
                return Err(ConfigError::InvalidVar {
                    name: TIMEOUT_VAR,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        name,
        reason: e.to_string(),
    })
}
