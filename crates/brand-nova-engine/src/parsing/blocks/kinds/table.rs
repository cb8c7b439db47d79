use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s|:-]*-[\s|:-]*$").expect("separator pattern is valid"));

/// Pipe tables.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// A header separator row: only pipes, dashes, colons and whitespace,
    /// with at least one dash.
    pub fn is_separator(line: &str) -> bool {
        SEPARATOR.is_match(line)
    }

    /// Splits a row into trimmed cells.
    ///
    /// The empty strings produced by a leading or trailing pipe are dropped;
    /// empty cells in between are kept so ragged rows stay ragged.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }
}
