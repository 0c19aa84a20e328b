/// Bold: a single `*` toggles the span open and closed.
pub struct Strong;

impl Strong {
    pub const TOGGLE: u16 = b'*' as u16;
    pub const TOKEN: &'static str = "*";
}

/// Italic: a single `_` toggles the span open and closed.
pub struct Emphasis;

impl Emphasis {
    pub const TOGGLE: u16 = b'_' as u16;
    pub const TOKEN: &'static str = "_";
}
