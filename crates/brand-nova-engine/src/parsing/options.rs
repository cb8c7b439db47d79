use serde::{Deserialize, Serialize};

/// How a pipe line is recognized as a table header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableDetection {
    /// The next line must be a separator row such as `|---|---|`.
    #[default]
    Separator,
    /// The next line only has to contain a pipe. A separator row right
    /// after the header is still skipped.
    AnyPipe,
}

/// What happens to a code fence still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedFence {
    /// Emit the collected lines as a code block anyway.
    #[default]
    Flush,
    /// Discard the collected lines.
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub table_detection: TableDetection,
    pub unclosed_fence: UnclosedFence,
}
