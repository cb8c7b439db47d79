use std::sync::LazyLock;

use regex::Regex;

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("ordered list pattern is valid"));

/// Bullet (`- `, `* `) and ordered (`1. `) list item markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Returns the item text if `line` starts with a list marker.
    pub fn strip_marker(line: &str) -> Option<&str> {
        if let Some(rest) = Self::BULLETS.iter().find_map(|b| line.strip_prefix(b)) {
            return Some(rest);
        }
        ORDERED.find(line).map(|m| &line[m.end()..])
    }

    /// True when some line of `text` starts with an ordered marker.
    pub fn any_ordered_line(text: &str) -> bool {
        text.lines().any(|l| ORDERED.is_match(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_markers() {
        assert_eq!(ListMarker::strip_marker("- item"), Some("item"));
        assert_eq!(ListMarker::strip_marker("* item"), Some("item"));
    }

    #[test]
    fn ordered_markers() {
        assert_eq!(ListMarker::strip_marker("1. first"), Some("first"));
        assert_eq!(ListMarker::strip_marker("42. answer"), Some("answer"));
    }

    #[test]
    fn markers_need_trailing_space() {
        assert_eq!(ListMarker::strip_marker("-item"), None);
        assert_eq!(ListMarker::strip_marker("1.first"), None);
        assert_eq!(ListMarker::strip_marker("a. letter"), None);
    }

    #[test]
    fn ordered_line_anywhere_in_text() {
        assert!(ListMarker::any_ordered_line("intro\n2. second"));
        assert!(!ListMarker::any_ordered_line("no list here"));
    }
}
