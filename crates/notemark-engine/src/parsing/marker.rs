use std::fmt;

use serde::Serialize;

use super::kinds::TokenKind;

/// Whether a marker opens or closes a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Begin,
    End,
}

/// A single begin/end event emitted by the lexer.
///
/// `index` is a UTF-16 unit offset into the source. For styled kinds it is
/// the first unit of the matched token. For `Raw`, a `Begin` points at the
/// first raw unit and an `End` at the *last* raw unit (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Marker {
    pub edge: Edge,
    pub kind: TokenKind,
    pub index: usize,
}

impl Marker {
    pub fn new(edge: Edge, kind: TokenKind, index: usize) -> Self {
        Self { edge, kind, index }
    }

    pub fn begin(kind: TokenKind, index: usize) -> Self {
        Self::new(Edge::Begin, kind, index)
    }

    pub fn end(kind: TokenKind, index: usize) -> Self {
        Self::new(Edge::End, kind, index)
    }

    pub fn is_begin_of(&self, kind: TokenKind) -> bool {
        self.edge == Edge::Begin && self.kind == kind
    }

    pub fn is_end_of(&self, kind: TokenKind) -> bool {
        self.edge == Edge::End && self.kind == kind
    }

    /// Number of source units the marker's token occupies.
    ///
    /// Zero for `Raw`; raw text is covered by the begin/end pair instead.
    pub fn token_len(&self) -> usize {
        match self.edge {
            Edge::Begin => self.kind.begin_len(),
            Edge::End => self.kind.end_len(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {})", self.edge, self.kind, self.index)
    }
}
