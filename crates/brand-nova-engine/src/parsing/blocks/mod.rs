//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` of local facts (fence signature, pipes, separator shape,
//!    single-line block markers, blank status).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` receives each
//!    line together with the next one, owns the multi-line state (fenced
//!    code, quotes, tables) and emits finished [`Element`]s.
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned delimiters (CodeFence, Table, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every emitted element has at least one child
//! - Consecutive list items are emitted as siblings; wrapping them in a
//!   bulleted or numbered list is left to the editor
//!
//! [`Element`]: crate::models::Element

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineMarker, MarkdownLineClassifier};
