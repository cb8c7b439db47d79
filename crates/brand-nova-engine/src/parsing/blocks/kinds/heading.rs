/// ATX headings, levels one to three.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 3;

    /// Returns `(level, text)` when `line` is `#`..`###` followed by a space.
    pub fn strip_marker(line: &str) -> Option<(usize, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        line[level..].strip_prefix(' ').map(|rest| (level, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        assert_eq!(Heading::strip_marker("# One"), Some((1, "One")));
        assert_eq!(Heading::strip_marker("## Two"), Some((2, "Two")));
        assert_eq!(Heading::strip_marker("### Three"), Some((3, "Three")));
    }

    #[test]
    fn marker_requires_space() {
        assert_eq!(Heading::strip_marker("#tag"), None);
        assert_eq!(Heading::strip_marker("#"), None);
    }

    #[test]
    fn deeper_levels_are_not_headings() {
        assert_eq!(Heading::strip_marker("#### Four"), None);
    }

    #[test]
    fn only_the_first_space_is_consumed() {
        assert_eq!(Heading::strip_marker("#  spaced"), Some((1, " spaced")));
    }
}
