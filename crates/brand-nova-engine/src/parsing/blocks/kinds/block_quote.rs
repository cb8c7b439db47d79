/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";
    /// A bare `>` line continues the quote with an empty line.
    pub const BARE: &'static str = ">";

    /// Returns the quoted text if `line` is a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        if line == Self::BARE {
            return Some("");
        }
        line.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn bare_marker_is_an_empty_quote_line() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }

    #[test]
    fn marker_without_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
    }
}
