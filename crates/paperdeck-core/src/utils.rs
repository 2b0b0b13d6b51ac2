//! Utility helpers — path resolution, date formatting, string manipulation.

use std::path::PathBuf;

/// Get the PaperDeck data directory (e.g. `~/.paperdeck/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".paperdeck")
}

/// Get today's date as YYYY-MM-DD.
pub fn today_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Keep the first `max_chars` characters of `s`.
///
/// Returns `None` when `s` already fits. Counts Unicode scalar values, so
/// CJK text is never split inside a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> Option<&str> {
    s.char_indices().nth(max_chars).map(|(idx, _)| &s[..idx])
}

/// Sanitize a string for use as a filename.
///
/// Replaces path separators and characters reserved on Windows with `-`,
/// collapses whitespace, and caps the length at 200 characters.
pub fn safe_filename(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    match truncate_chars(&collapsed, 200) {
        Some(cut) => cut.trim_end().to_string(),
        None => collapsed,
    }
}

/// Helper to get home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_chars("hello", 10), None);
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_chars("hello", 5), None);
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_chars("hello world", 5), Some("hello"));
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate_chars("こんにちは世界です", 5), Some("こんにちは"));
    }

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("a/b: c?"), "a-b- c-");
        assert_eq!(safe_filename("Deep   Learning\t- Slides.html"), "Deep Learning - Slides.html");
    }

    #[test]
    fn test_safe_filename_length_cap() {
        let long = "x".repeat(500);
        assert_eq!(safe_filename(&long).chars().count(), 200);
    }

    #[test]
    fn test_today_date_format() {
        let date = today_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.chars().nth(4), Some('-'));
        assert_eq!(date.chars().nth(7), Some('-'));
    }

    #[test]
    fn test_data_path_ends_with_paperdeck() {
        assert!(get_data_path().ends_with(".paperdeck"));
    }
}
