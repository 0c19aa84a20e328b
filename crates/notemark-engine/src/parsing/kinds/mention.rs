/// Mention inline type with owned delimiter constants.
///
/// `@[name]` is the only kind with a two-unit opening token and a distinct
/// closing token. `TRIGGER` alone is what the user types to start one.
pub struct Mention;

impl Mention {
    /// The character that starts a mention when followed by `BRACKET_OPEN`.
    pub const TRIGGER: u16 = b'@' as u16;
    pub const BRACKET_OPEN: u16 = b'[' as u16;
    pub const BRACKET_CLOSE: u16 = b']' as u16;

    pub const OPEN: &'static str = "@[";
    pub const CLOSE_TOKEN: &'static str = "]";

    /// Bracket pair spliced in after a freshly typed trigger.
    pub const BRACKETS: &'static str = "[]";
}
