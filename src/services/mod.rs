//! Service layer for the hot-list fetcher.
//!
//! - Fetching the raw hot list (`HotListFetcher`)
//! - Normalizing it into ranked entries (`format_hot_list`)

mod fetcher;
mod hot_list;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use fetcher::HotListFetcher;
pub use hot_list::{UNKNOWN_KIND, UNTITLED, format_hot_list};

/// Anything that can produce one raw hot-list document.
#[async_trait]
pub trait HotListSource: Send + Sync {
    /// Fetch the raw JSON document.
    async fn fetch(&self) -> Result<Value>;

    /// Prefix used to synthesize links for entries without one.
    fn search_url_prefix(&self) -> &str;
}
