// src/presenter.rs

//! Console rendering of the hot list.

use std::fmt::Write as _;

use crate::error::Result;
use crate::models::HotEntry;

const RULE_WIDTH: usize = 70;

/// Render the hot list as display text.
pub fn render(entries: &[HotEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔥 抖音热榜 TOP {}", entries.len());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out.push('\n');

    for entry in entries {
        let _ = writeln!(out, "{:02}. {}", entry.rank, entry.title);
        let _ = writeln!(out, "    🔥 热度: {}", group_thousands(entry.popularity));
        if let Some(label) = &entry.label {
            let _ = writeln!(out, "    🏷️  标签: {}", label);
        }
        let _ = writeln!(out, "    🔗 链接: {}", entry.link);
        out.push('\n');
    }
    out
}

/// Print the hot list to stdout.
pub fn print(entries: &[HotEntry]) {
    print!("{}", render(entries));
}

/// Print the hot list to stdout as a pretty JSON array.
pub fn print_json(entries: &[HotEntry]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: usize, label: Option<&str>) -> HotEntry {
        HotEntry {
            rank,
            title: format!("话题{rank}"),
            popularity: 11_892_345,
            link: format!("https://www.douyin.com/search/{rank}"),
            label: label.map(str::to_string),
            kind: "未知".to_string(),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_render_header_counts_entries() {
        let text = render(&[entry(1, None), entry(2, None)]);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("🔥 抖音热榜 TOP 2"));
        assert_eq!(lines.next(), Some("=".repeat(70).as_str()));
    }

    #[test]
    fn test_render_entry_block() {
        let text = render(&[entry(3, Some("热"))]);
        assert!(text.contains("03. 话题3\n"));
        assert!(text.contains("    🔥 热度: 11,892,345\n"));
        assert!(text.contains("    🏷️  标签: 热\n"));
        assert!(text.contains("    🔗 链接: https://www.douyin.com/search/3\n"));
    }

    #[test]
    fn test_render_omits_missing_label() {
        let text = render(&[entry(12, None)]);
        assert!(text.contains("12. 话题12\n"));
        assert!(!text.contains("标签"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render(&[]).starts_with("🔥 抖音热榜 TOP 0\n"));
    }
}
