use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Channel whose uploads are picked from unless `YT_CHANNEL_NAME` says otherwise
pub const DEFAULT_CHANNEL: &str = "yogawithadriene";

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base data directory (~/.yt-yoga/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("YT_YOGA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".yt-yoga")
            })
    })
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Settings for one run, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub channel: String,
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            channel: DEFAULT_CHANNEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("YT_API_KEY").ok_or(Error::ApiKeyMissing)?;
        let mut config = Config::new(api_key.trim());

        if let Some(channel) = get("YT_CHANNEL_NAME") {
            config = config.with_channel(channel.trim());
        }
        if let Some(url) = get("YT_API_BASE_URL") {
            config = config.with_api_base_url(url.trim());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("YT_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.channel, DEFAULT_CHANNEL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::ApiKeyMissing));

        let err = Config::from_lookup(lookup(&[("YT_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, Error::ApiKeyMissing));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("YT_API_KEY", "abc"),
            ("YT_CHANNEL_NAME", "someoneelse"),
            ("YT_API_BASE_URL", "http://localhost:9999/v3/"),
        ]))
        .unwrap();
        assert_eq!(config.channel, "someoneelse");
        assert_eq!(config.api_base_url, "http://localhost:9999/v3");
    }
}
