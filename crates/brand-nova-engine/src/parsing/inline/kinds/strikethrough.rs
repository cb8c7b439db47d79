pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static [u8; 2] = b"~~";
}
