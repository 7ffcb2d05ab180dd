// src/utils/url.rs

//! URL manipulation utilities.

/// Build the site search link for a term.
///
/// # Examples
/// ```
/// use douyin_hot::utils::url::search_link;
///
/// assert_eq!(
///     search_link("https://www.douyin.com/search/", "a b"),
///     "https://www.douyin.com/search/a%20b"
/// );
/// ```
pub fn search_link(prefix: &str, term: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://www.douyin.com/search/";

    #[test]
    fn test_search_link_ascii() {
        assert_eq!(search_link(PREFIX, "A"), "https://www.douyin.com/search/A");
    }

    #[test]
    fn test_search_link_encodes_cjk() {
        assert_eq!(
            search_link(PREFIX, "热搜"),
            "https://www.douyin.com/search/%E7%83%AD%E6%90%9C"
        );
    }

    #[test]
    fn test_search_link_encodes_reserved() {
        assert_eq!(
            search_link(PREFIX, "a/b?c&d"),
            "https://www.douyin.com/search/a%2Fb%3Fc%26d"
        );
    }
}
