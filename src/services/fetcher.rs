// src/services/fetcher.rs

//! Hot-list fetcher service.
//!
//! Performs exactly one GET against the hot-search endpoint and parses the
//! body as JSON. No retries.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{HotEntry, HotListConfig};
use crate::services::HotListSource;
use crate::services::hot_list::format_hot_list;
use crate::utils::{http, pick_user_agent};

/// Service for fetching the raw hot list.
pub struct HotListFetcher {
    config: HotListConfig,
    client: Client,
    rng: Mutex<StdRng>,
}

impl HotListFetcher {
    /// Create a fetcher whose User-Agent choice is seeded from OS entropy.
    pub fn new(config: HotListConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a fetcher with an explicit random source for User-Agent choice.
    pub fn with_rng(config: HotListConfig, rng: StdRng) -> Result<Self> {
        let client = http::create_async_client(&config)?;
        Ok(Self {
            config,
            client,
            rng: Mutex::new(rng),
        })
    }

    pub fn config(&self) -> &HotListConfig {
        &self.config
    }

    /// Fetch the hot list within the configured deadline.
    pub async fn fetch(&self) -> Result<Value> {
        self.fetch_within(self.config.timeout()).await
    }

    /// Fetch the hot list, failing with `AppError::Timeout` once `deadline`
    /// passes without a complete response.
    pub async fn fetch_within(&self, deadline: Duration) -> Result<Value> {
        let user_agent = self.next_user_agent();
        log::debug!(
            "GET {} (deadline {:?}, user agent {:?})",
            self.config.endpoint,
            deadline,
            user_agent
        );

        match tokio::time::timeout(deadline, self.request(user_agent, deadline)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(deadline)),
        }
    }

    /// Normalize a raw response using this fetcher's search-link prefix.
    pub fn format(&self, data: Option<&Value>, limit: usize) -> Vec<HotEntry> {
        format_hot_list(data, limit, &self.config.search_url_prefix)
    }

    async fn request(&self, user_agent: Option<String>, deadline: Duration) -> Result<Value> {
        let mut request = self.client.get(&self.config.endpoint).timeout(deadline);
        if let Some(user_agent) = user_agent {
            request = request.header(USER_AGENT, user_agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::from_request(e, deadline))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Hot list endpoint answered {}", status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::from_request(e, deadline))?;
        log::debug!("Received {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }

    fn next_user_agent(&self) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pick_user_agent(&self.config.user_agents, &mut *rng).map(str::to_owned)
    }
}

#[async_trait]
impl HotListSource for HotListFetcher {
    async fn fetch(&self) -> Result<Value> {
        HotListFetcher::fetch(self).await
    }

    fn search_url_prefix(&self) -> &str {
        &self.config.search_url_prefix
    }
}
