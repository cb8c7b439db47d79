//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The parser reads these
//! constants; it never hardcodes `**` or `` ` ``.
//!
//! - **`Emphasis`**: `***` (bold + italic), `**` (bold), `*` (italic)
//! - **`Strikethrough`**: `~~`
//! - **`CodeSpan`**: `` ` ``
//! - **`Link`**: `[label](url)`

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use strikethrough::Strikethrough;
