/// A scanner for unit-by-unit lexing with one unit of lookahead.
///
/// Operates over UTF-16 code units so that every offset it reports matches
/// the caret offsets a text input hands us.
#[derive(Clone)]
pub struct Scanner {
    units: Vec<u16>,
    /// Current index into `units`.
    i: usize,
}

impl Scanner {
    /// Creates a scanner at the start of `s`.
    pub fn new(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
            i: 0,
        }
    }

    /// Returns the current unit offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Total length of the input in UTF-16 units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.units.len()
    }

    /// Peeks at the current unit without advancing.
    pub fn peek(&self) -> Option<u16> {
        self.units.get(self.i).copied()
    }

    /// Peeks at the unit right after the current one.
    pub fn peek_next(&self) -> Option<u16> {
        self.units.get(self.i + 1).copied()
    }

    /// Advances by one unit, returning the consumed unit.
    pub fn bump(&mut self) -> Option<u16> {
        let u = self.units.get(self.i).copied()?;
        self.i += 1;
        Some(u)
    }
}
