

use serde::{Deserialize, Serialize};
use url::Url;

use super::credentials::Credentials;
use super::error::{KeywordError, Result};
use crate::{
    DEFAULT_CREDENTIALS_PATH, DEFAULT_KEYWORD_COUNT, DEFAULT_SERPAPI_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TRENDS_URL,
};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {

    pub serpapi_api_key: Option<String>,
    pub serpapi_url: String,


    pub trends_enabled: bool,
    pub trends_url: String,
    pub trends_geo: String,
    pub trends_language: String,
    pub trends_timezone: i32,
    pub trends_timeframe: String,


    pub timeout: u64,
    pub credentials_path: String,
    pub default_count: usize,
    pub rng_seed: Option<u64>,
}

impl KeywordConfig {

    pub fn new() -> Self {
        Self {
            serpapi_api_key: None,
            serpapi_url: DEFAULT_SERPAPI_URL.to_string(),

            trends_enabled: true,
            trends_url: DEFAULT_TRENDS_URL.to_string(),
            trends_geo: "US".to_string(),
            trends_language: "en-US".to_string(),
            trends_timezone: 120,
            trends_timeframe: "today 12-m".to_string(),

            timeout: DEFAULT_TIMEOUT_SECS,
            credentials_path: DEFAULT_CREDENTIALS_PATH.to_string(),
            default_count: DEFAULT_KEYWORD_COUNT,
            rng_seed: None,
        }
    }


    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(key) = std::env::var("SEO_SERPAPI_KEY") {
            config.serpapi_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("SEO_SERPAPI_URL") {
            config.serpapi_url = url;
        }
        if let Ok(enabled) = std::env::var("SEO_TRENDS_ENABLED") {
            config.trends_enabled = parse_flag(&enabled).unwrap_or(config.trends_enabled);
        }
        if let Ok(url) = std::env::var("SEO_TRENDS_URL") {
            config.trends_url = url;
        }
        if let Ok(geo) = std::env::var("SEO_TRENDS_GEO") {
            config.trends_geo = geo;
        }
        if let Some(timeout) = std::env::var("SEO_TIMEOUT").ok().and_then(|t| t.parse().ok()) {
            config.timeout = timeout;
        }
        if let Ok(path) = std::env::var("SEO_CREDENTIALS_PATH") {
            config.credentials_path = path;
        }
        if let Some(seed) = std::env::var("SEO_RNG_SEED").ok().and_then(|s| s.parse().ok()) {
            config.rng_seed = Some(seed);
        }

        config
    }


    pub fn with_credentials(mut self, credentials: &Credentials) -> Self {
        if self.serpapi_key().is_none() && credentials.is_configured() {
            self.serpapi_api_key = Some(credentials.serpapi.trim().to_string());
        }
        self
    }


    pub fn serpapi_key(&self) -> Option<&str> {
        self.serpapi_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("serpapi_url", &self.serpapi_url), ("trends_url", &self.trends_url)] {
            Url::parse(value)
                .map_err(|e| KeywordError::Config(format!("{name} is not a valid URL ({value}): {e}")))?;
        }
        if self.timeout == 0 {
            return Err(KeywordError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
