use std::sync::LazyLock;

use regex::Regex;

static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-*] \[([ xX])\](?: (.*))?$").expect("checklist pattern is valid")
});

/// `- [ ] todo` / `- [x] done` checklist items.
pub struct CheckList;

impl CheckList {
    pub const CHECKED: [char; 2] = ['x', 'X'];

    /// Returns `(checked, text)` when `line` is a checklist item.
    pub fn strip_marker(line: &str) -> Option<(bool, &str)> {
        let caps = ITEM.captures(line)?;
        let checked = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .is_some_and(|c| Self::CHECKED.contains(&c));
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((checked, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_and_unchecked() {
        assert_eq!(CheckList::strip_marker("- [x] Done"), Some((true, "Done")));
        assert_eq!(CheckList::strip_marker("* [X] Also"), Some((true, "Also")));
        assert_eq!(CheckList::strip_marker("- [ ] Todo"), Some((false, "Todo")));
    }

    #[test]
    fn box_without_text() {
        assert_eq!(CheckList::strip_marker("- [ ]"), Some((false, "")));
    }

    #[test]
    fn plain_bullets_and_glued_text_are_not_items() {
        assert_eq!(CheckList::strip_marker("- item"), None);
        assert_eq!(CheckList::strip_marker("- [x]Done"), None);
        assert_eq!(CheckList::strip_marker("- [y] maybe"), None);
    }
}
