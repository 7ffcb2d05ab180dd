// src/services/hot_list.rs

//! Normalization of the raw hot-list response.
//!
//! The upstream schema is undocumented, so every field is optional and
//! defaulted. Items live at `data.word_list`.

use serde_json::Value;

use crate::models::HotEntry;
use crate::utils::url::search_link;

/// Title used when an item has no `word`.
pub const UNTITLED: &str = "无标题";

/// Type marker used when an item has no `type`.
pub const UNKNOWN_KIND: &str = "未知";

const WORD_LIST_POINTER: &str = "/data/word_list";

/// Map a raw response into at most `limit` ranked entries.
///
/// Missing data or a missing word list yields an empty list, not an error.
pub fn format_hot_list(data: Option<&Value>, limit: usize, search_url_prefix: &str) -> Vec<HotEntry> {
    let Some(items) = data
        .and_then(|d| d.pointer(WORD_LIST_POINTER))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, item)| to_entry(idx + 1, item, search_url_prefix))
        .collect()
}

fn to_entry(rank: usize, item: &Value, search_url_prefix: &str) -> HotEntry {
    let title = text_field(item, "word").unwrap_or_else(|| UNTITLED.to_string());
    let link = text_field(item, "url").unwrap_or_else(|| search_link(search_url_prefix, &title));

    HotEntry {
        rank,
        popularity: popularity(item.get("hot_value")),
        label: text_field(item, "label"),
        kind: text_field(item, "type").unwrap_or_else(|| UNKNOWN_KIND.to_string()),
        title,
        link,
    }
}

/// Read a field as display text; empty strings and zero count as absent.
fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn popularity(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
