//! # BrandNova Editor Engine
//!
//! The framework-independent core of the BrandNova rich-text editor:
//!
//! - **`models`**: The node vocabulary (elements, text runs, marks)
//! - **`parsing`**: Pasted lightweight markup to a node tree
//! - **`serializing`**: Node tree to HTML
//! - **`stats`**: Word and character counts
//! - **`editing`**: Paste handling against the host's insertion API
//!
//! ```rust
//! use brand_nova_engine::{parse, serialize_elements};
//!
//! let blocks = parse("# Hello\n**bold** text");
//! assert_eq!(
//!     serialize_elements(&blocks),
//!     "<h1>Hello</h1><p><strong>bold</strong> text</p>"
//! );
//! ```

pub mod editing;
pub mod models;
pub mod parsing;
pub mod serializing;
pub mod stats;

// Re-export key types for easier usage
pub use editing::{Document, NodeInserter, PasteOutcome, handle_paste, looks_like_markdown};
pub use models::{Align, Element, ElementType, Mark, Marks, Node, TextNode};
pub use parsing::{ParseOptions, TableDetection, UnclosedFence, parse, parse_with_options};
pub use serializing::{serialize, serialize_elements};
pub use stats::ContentStats;
