//! Process-wide configuration, read once from the environment at startup.

use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;
use url::Url;

/// Default chat-completions endpoint (Gemini's `OpenAI`-compatible surface).
pub const DEFAULT_LLM_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";
/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Default time zone used to compute calendar days (Campina Grande, PB).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Fortaleza;
/// Default listen port.
pub const DEFAULT_PORT: u16 = 5001;
/// Default deploy environment label.
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but could not be parsed.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A URL variable did not parse.
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Variable name.
        name: &'static str,
        /// Parser error.
        source: url::ParseError,
    },
}

/// Remote session store settings.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base URL of the Supabase project (without `/rest/v1`).
    pub base_url: Option<Url>,
    /// Service or anon key sent as `apikey` and bearer token.
    pub api_key: Option<String>,
    /// Timeout for each store request.
    pub request_timeout: Duration,
}

impl StoreConfig {
    /// Whether both the URL and the key are present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Generative model settings.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    /// API key; `None` selects the template-only reporter.
    pub api_key: Option<String>,
    /// Chat-completions endpoint.
    pub api_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget.
    pub max_tokens: u32,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_LLM_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 300,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Top-level configuration, immutable once built.
#[derive(Clone, Debug)]
pub struct RadarConfig {
    /// Session store settings.
    pub store: StoreConfig,
    /// Model settings.
    pub llm: LlmConfig,
    /// Zone used for "today" and for rendering dates.
    pub timezone: Tz,
    /// Listen port.
    pub port: u16,
    /// Deploy environment label (`RENDER` or `local`).
    pub environment: String,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            llm: LlmConfig::default(),
            timezone: DEFAULT_TIMEZONE,
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl RadarConfig {
    /// Load `.env` (when present) and read the process environment.
    ///
    /// # Errors
    /// Returns an error if a present variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as absent.
    ///
    /// # Errors
    /// Returns an error if a present variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let base_url = get("SUPABASE_URL")
            .map(|raw| parse_url("SUPABASE_URL", &raw))
            .transpose()?;

        let request_timeout = match get("STORE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("STORE_TIMEOUT_SECS", &raw)?),
            None => defaults.store.request_timeout,
        };

        let api_url = match get("LLM_API_URL") {
            Some(raw) => parse_url("LLM_API_URL", &raw)?.to_string(),
            None => defaults.llm.api_url,
        };

        let timezone = match get("RADAR_TIMEZONE") {
            Some(raw) => raw.parse::<Tz>().map_err(|e| ConfigError::InvalidValue {
                name: "RADAR_TIMEZONE",
                reason: e.to_string(),
            })?,
            None => defaults.timezone,
        };

        let port = match get("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => defaults.port,
        };

        Ok(Self {
            store: StoreConfig {
                base_url,
                api_key: get("SUPABASE_KEY"),
                request_timeout,
            },
            llm: LlmConfig {
                api_key: get("GEMINI_API_KEY").or_else(|| get("LLM_API_KEY")),
                api_url,
                model: get("GEMINI_MODEL").unwrap_or(defaults.llm.model),
                ..defaults.llm
            },
            timezone,
            port,
            environment: get("RENDER").unwrap_or(defaults.environment),
        })
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn parse_number<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        })
}
