//! # Inline Parsing
//!
//! Resolves inline formatting inside the text of one block.
//!
//! ## Resolution
//!
//! 1. Links (`[label](url)`) are matched first, left to right. Their labels
//!    are resolved recursively.
//! 2. Every delimiter family is scanned for balanced pairs, in fixed
//!    precedence: `***` > `**` > `*` > `~~` > `` ` ``.
//! 3. Candidates are ordered by start position (precedence breaks ties) and
//!    accepted first-match-wins: a candidate that overlaps any accepted span
//!    is dropped.
//! 4. Accepted spans are emitted in order with the literal gaps between them.
//!
//! An opener without a closer on the same line stays literal text. Marked
//! content is literal too: `**a *b***` does not nest.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants per construct
//! - **`cursor`**: `Cursor` for byte scanning
//! - **`types`**: `InlineMatch` candidates and the `DelimiterRule` table row
//! - **`parser`**: `parse_inline()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineKind, InlineMatch};
