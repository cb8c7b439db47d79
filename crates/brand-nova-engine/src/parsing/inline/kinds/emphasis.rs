/// Asterisk emphasis in its three widths.
///
/// The widths are scanned longest first so that `**bold**` is never split
/// into single-star italic fragments.
pub struct Emphasis;

impl Emphasis {
    /// Bold and italic together.
    pub const STRONG_EM: &'static [u8; 3] = b"***";
    pub const STRONG: &'static [u8; 2] = b"**";
    /// Only counts when not part of a wider run of stars.
    pub const EM: &'static [u8; 1] = b"*";
}
