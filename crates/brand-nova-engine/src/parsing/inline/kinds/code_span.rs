/// Backtick-delimited code span. Its content is literal.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static [u8; 1] = b"`";
}
