// src/pipeline/hot.rs

//! Hot-list pipeline: fetch, normalize, reject empty results.

use crate::error::{AppError, Result};
use crate::models::HotEntry;
use crate::services::{HotListSource, format_hot_list};

/// Fetch one hot list from `source` and return at most `limit` entries.
///
/// A response that yields no entries is `AppError::EmptyList`.
pub async fn run_hot(source: &dyn HotListSource, limit: usize) -> Result<Vec<HotEntry>> {
    log::info!("Fetching hot list...");
    let data = source.fetch().await?;

    let entries = format_hot_list(Some(&data), limit, source.search_url_prefix());
    if entries.is_empty() {
        return Err(AppError::EmptyList);
    }

    log::info!("Fetched {} entries", entries.len());
    Ok(entries)
}

/// Parse a user-supplied limit the lenient way: leading digits are used,
/// and a missing, non-numeric or zero value falls back to `default`.
pub fn parse_limit(raw: Option<&str>, default: usize) -> usize {
    raw.map(str::trim)
        .map(|s| {
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            &s[..end]
        })
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}
