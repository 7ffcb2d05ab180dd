//! Fetcher configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Settings for the hot-list request and its normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotListConfig {
    /// Full URL of the hot-search endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Prefix for links synthesized from a title
    #[serde(default = "defaults::search_url_prefix")]
    pub search_url_prefix: String,

    /// Referer header value
    #[serde(default = "defaults::referer")]
    pub referer: String,

    /// Accept-Language header value
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Request deadline in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Number of entries when the caller gives no usable limit
    #[serde(default = "defaults::default_limit")]
    pub default_limit: usize,

    /// Pool of User-Agent strings, one is picked per request
    #[serde(default = "defaults::user_agents")]
    pub user_agents: Vec<String>,
}

impl HotListConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::validation("endpoint is empty"));
        }
        if self.search_url_prefix.trim().is_empty() {
            return Err(AppError::validation("search_url_prefix is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::validation("timeout_secs must be > 0"));
        }
        if self.default_limit == 0 {
            return Err(AppError::validation("default_limit must be > 0"));
        }
        if self.user_agents.iter().all(|ua| ua.trim().is_empty()) {
            return Err(AppError::validation("user_agents has no usable entry"));
        }
        Ok(())
    }

    /// Request deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HotListConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            search_url_prefix: defaults::search_url_prefix(),
            referer: defaults::referer(),
            accept_language: defaults::accept_language(),
            timeout_secs: defaults::timeout(),
            default_limit: defaults::default_limit(),
            user_agents: defaults::user_agents(),
        }
    }
}

mod defaults {
    pub fn endpoint() -> String {
        "https://www.douyin.com/aweme/v1/hot/search/list/".into()
    }
    pub fn search_url_prefix() -> String {
        "https://www.douyin.com/search/".into()
    }
    pub fn referer() -> String {
        "https://www.douyin.com/".into()
    }
    pub fn accept_language() -> String {
        "zh-CN,zh;q=0.9,en;q=0.8".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn default_limit() -> usize {
        50
    }

    pub fn user_agents() -> Vec<String> {
        vec![
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0".into(),
        ]
    }
}
