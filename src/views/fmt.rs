//! Cell formatting for the post table.

use crate::types::AuthorRef;
use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Placeholder for fields the record does not carry.
pub const PLACEHOLDER: &str = "-";

/// Max characters of a rendered title before ellipsis truncation.
pub const TITLE_MAX_CHARS: usize = 28;

/// Capitalize the first letter of every word.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Single-line ellipsis truncation at `max` characters.
pub fn truncate_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let take = max.saturating_sub(1);
    let mut out: String = text.chars().take(take).collect();
    out.push('…');
    out
}

pub fn title_cell(title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => {
            truncate_ellipsis(&capitalize(title), TITLE_MAX_CHARS)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn view_count_cell(count: Option<i64>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Chip-style author label: `[Full Name]`, capitalized.
pub fn author_chip(author: Option<&AuthorRef>) -> String {
    match author.and_then(|a| a.fullname.as_deref()).filter(|n| !n.is_empty()) {
        Some(name) => format!("[{}]", capitalize(name)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parse `createdAt` and render it as a local date-time string.
///
/// Accepts RFC 3339, a bare naive date-time (treated as UTC), or an epoch
/// value in seconds or milliseconds. Missing or unparseable values render
/// the placeholder rather than failing.
pub fn created_at_cell(raw: Option<&str>) -> String {
    match raw.and_then(parse_instant) {
        Some(instant) => instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(epoch) = raw.parse::<i64>() {
        // Heuristic: 13+ digit magnitudes are milliseconds.
        return if epoch.abs() >= 1_000_000_000_000 {
            DateTime::from_timestamp_millis(epoch)
        } else {
            DateTime::from_timestamp(epoch, 0)
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_each_word() {
        assert_eq!(capitalize("hello wide world"), "Hello Wide World");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_ellipsis("short", 28), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let long = "a".repeat(40);
        let out = truncate_ellipsis(&long, 28);
        assert_eq!(out.chars().count(), 28);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn title_cell_capitalizes_and_truncates() {
        assert_eq!(title_cell(Some("the quick brown fox")), "The Quick Brown Fox");
        assert_eq!(title_cell(None), PLACEHOLDER);
        assert_eq!(title_cell(Some("")), PLACEHOLDER);
    }

    #[test]
    fn author_chip_wraps_and_capitalizes() {
        let author = AuthorRef {
            fullname: Some("jane roe".to_string()),
        };
        assert_eq!(author_chip(Some(&author)), "[Jane Roe]");
        assert_eq!(author_chip(None), PLACEHOLDER);
    }

    #[test]
    fn created_at_formats_instant_not_raw_iso() {
        let out = created_at_cell(Some("2023-01-15T10:00:00Z"));
        assert_ne!(out, "2023-01-15T10:00:00Z");
        assert!(!out.contains('T'));
        assert!(out.starts_with("2023-01-1"));
    }

    #[test]
    fn created_at_accepts_epoch_millis_and_seconds() {
        // Both represent 2023-01-15T10:00:00Z.
        let from_millis = created_at_cell(Some("1673776800000"));
        let from_secs = created_at_cell(Some("1673776800"));
        assert_eq!(from_millis, from_secs);
        assert_ne!(from_millis, PLACEHOLDER);
    }

    #[test]
    fn created_at_garbage_renders_placeholder() {
        assert_eq!(created_at_cell(Some("not a date")), PLACEHOLDER);
        assert_eq!(created_at_cell(None), PLACEHOLDER);
        assert_eq!(created_at_cell(Some("")), PLACEHOLDER);
    }

    #[test]
    fn view_count_cell_renders_number() {
        assert_eq!(view_count_cell(Some(42)), "42");
        assert_eq!(view_count_cell(None), PLACEHOLDER);
    }
}
