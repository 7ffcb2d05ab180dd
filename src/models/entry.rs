//! Hot-list entry data structure.

use serde::{Deserialize, Serialize};

/// One ranked item of the normalized hot list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotEntry {
    /// 1-based position in the source list
    pub rank: usize,

    /// Search term shown to the user
    pub title: String,

    /// Popularity score reported by the site
    pub popularity: u64,

    /// Link to the search results for this term
    pub link: String,

    /// Optional tag (e.g. "new", "hot")
    pub label: Option<String>,

    /// Entry type marker
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type() {
        let entry = HotEntry {
            rank: 1,
            title: "A".to_string(),
            popularity: 100,
            link: "https://www.douyin.com/search/A".to_string(),
            label: None,
            kind: "未知".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "未知");
        assert!(json["label"].is_null());
        assert!(json.get("kind").is_none());
    }
}
