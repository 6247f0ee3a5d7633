use std::collections::HashMap;
use std::fmt;

use url::Url;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "GIPHY_API_KEY";
pub const API_URL_VAR: &str = "GIPHY_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.giphy.com/v1/gifs/search";

/// Where configuration values come from. The binary reads the process
/// environment; tests hand in a map.
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment, after `.env` has been loaded into it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: Url,
}

impl Config {
    pub fn load(source: &dyn ConfigSource) -> Result<Self> {
        let api_key = source
            .var(API_KEY_VAR)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "{} is not set. Create a .env file or export it in your environment",
                    API_KEY_VAR
                ))
            })?;

        let raw_url = source
            .var(API_URL_VAR)
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        let api_url = Url::parse(&raw_url)
            .map_err(|e| Error::Config(format!("{} '{}' is not a valid URL: {}", API_URL_VAR, raw_url, e)))?;

        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_VAR, raw_url
            )));
        }

        Ok(Self { api_key, api_url })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &mask_key(&self.api_key))
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

/// Partially hides a secret for logs.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "********".to_string()
    }
}
