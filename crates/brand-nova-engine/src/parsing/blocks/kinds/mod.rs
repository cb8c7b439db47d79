pub mod block_quote;
pub mod check_list;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use check_list::CheckList;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use list_marker::ListMarker;
pub use table::Table;
pub use thematic_break::ThematicBreak;
