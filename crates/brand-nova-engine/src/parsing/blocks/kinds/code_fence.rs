/// Signature of a line that opens or closes a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Text after the backticks, trimmed. Empty when absent.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Language recorded when the opening fence names none.
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    pub fn sig(line: &str) -> Option<FenceSig> {
        line.strip_prefix(Self::BACKTICKS).map(|rest| FenceSig {
            info: rest.trim().to_string(),
        })
    }

    /// The language tag an opening fence declares.
    pub fn language(sig: &FenceSig) -> &str {
        if sig.info.is_empty() {
            Self::DEFAULT_LANGUAGE
        } else {
            &sig.info
        }
    }
}
