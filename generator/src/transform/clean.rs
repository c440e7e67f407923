//! Text cleanup for scraped cell values.
//!
//! Scraper exports carry escaped newlines, stray quotes, icon glyphs from
//! the private-use area and dangling `·` separators. [`clean_text`] removes
//! all of them so every field reads as plain display text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator glyph the scraper leaves between inline fields.
pub const MIDDLE_DOT: char = '·';

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Whether `c` lies in a Unicode private-use area.
///
/// Icon fonts map their glyphs there, so a scraped label like
/// `"\u{e0c8} 02 1234 5678"` starts with one.
pub fn is_private_use(c: char) -> bool {
    matches!(c,
        '\u{E000}'..='\u{F8FF}'
        | '\u{F0000}'..='\u{FFFFD}'
        | '\u{100000}'..='\u{10FFFD}')
}

/// Normalize one scraped value into display text.
///
/// - literal `\n` sequences and real line breaks become spaces
/// - whitespace runs collapse to one space
/// - surrounding whitespace and `"` are trimmed
/// - a leading run of private-use glyphs is dropped
/// - leading/trailing `·` separators are trimmed
///
/// Returns an empty string when nothing displayable remains.
pub fn clean_text(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let unescaped = value
        .replace("\\n", " ")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ");
    let collapsed = WHITESPACE_RUN.replace_all(&unescaped, " ");

    collapsed
        .trim_matches(|c: char| c.is_whitespace() || c == '"')
        .trim_start_matches(|c: char| is_private_use(c) || c.is_whitespace())
        .trim_matches(|c: char| c == MIDDLE_DOT || c.is_whitespace())
        .to_string()
}

/// [`clean_text`], mapping an empty result to `None`.
pub fn clean_optional(value: &str) -> Option<String> {
    let cleaned = clean_text(value);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Clean a review count such as `"(1,234)"` down to `"1,234"`.
pub fn clean_review_count(value: &str) -> String {
    clean_text(value)
        .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
        .to_string()
}

/// Whether a cleaned value carries no content worth showing.
pub fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.chars().all(|c| c == MIDDLE_DOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace_and_quotes() {
        assert_eq!(clean_text("  \"Roll Café\"  "), "Roll Café");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_replaces_newlines() {
        assert_eq!(clean_text("Open\\nCloses 6 PM"), "Open Closes 6 PM");
        assert_eq!(clean_text("Open\nCloses 6 PM"), "Open Closes 6 PM");
        assert_eq!(clean_text("Open\r\n\r\nCloses"), "Open Closes");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("Dine-in   ·   Takeaway"), "Dine-in · Takeaway");
    }

    #[test]
    fn test_strips_leading_private_use_glyphs() {
        assert_eq!(clean_text("\u{e0c8}\u{e0b0} 02 2345 6789"), "02 2345 6789");
        assert_eq!(clean_text("\u{ea74}Delivery"), "Delivery");
    }

    #[test]
    fn test_keeps_inner_private_use_glyphs() {
        assert_eq!(clean_text("A\u{e0c8}B"), "A\u{e0c8}B");
    }

    #[test]
    fn test_strips_middle_dot_edges() {
        assert_eq!(clean_text(" · Bakery"), "Bakery");
        assert_eq!(clean_text("Bakery · "), "Bakery");
        assert_eq!(clean_text("·"), "");
    }

    #[test]
    fn test_combined_artifacts() {
        let raw = "\" \u{e8b5} · 台北市大安區\\n復興南路 · \"";
        assert_eq!(clean_text(raw), "台北市大安區 復興南路");
    }

    #[test]
    fn test_clean_optional() {
        assert_eq!(clean_optional(" · "), None);
        assert_eq!(clean_optional(" 4.8 ").as_deref(), Some("4.8"));
    }

    #[test]
    fn test_clean_review_count() {
        assert_eq!(clean_review_count("(1,234)"), "1,234");
        assert_eq!(clean_review_count(" ( 56 ) "), "56");
        assert_eq!(clean_review_count(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("·"));
        assert!(is_blank(" ·· "));
        assert!(!is_blank("a"));
    }
}
