//! # Token Kinds
//!
//! The closed set of inline kinds and the token strings each one owns.
//!
//! ## Types
//!
//! - **`Strong`**: `TOGGLE = '*'` - opens and closes bold
//! - **`Emphasis`**: `TOGGLE = '_'` - opens and closes italic
//! - **`Mention`**: `OPEN = "@["`, `CLOSE = ']'`
//!
//! The lexer and span indexer read delimiters from here; they never
//! hardcode `*`, `_`, `@[` or `]` themselves.

pub mod emphasis;
pub mod mention;

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::UnknownKindError;

pub use emphasis::{Emphasis, Strong};
pub use mention::Mention;

/// The kind of run a [`Marker`](super::Marker) opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Plain text not covered by any token.
    Raw,
    Bold,
    Italic,
    Mention,
}

impl TokenKind {
    /// Kinds that carry visible tokens, in a stable order.
    pub const STYLED: [TokenKind; 3] = [TokenKind::Bold, TokenKind::Italic, TokenKind::Mention];

    /// Token that opens a span of this kind (empty for `Raw`).
    pub fn begin_token(self) -> &'static str {
        match self {
            TokenKind::Raw => "",
            TokenKind::Bold => Strong::TOKEN,
            TokenKind::Italic => Emphasis::TOKEN,
            TokenKind::Mention => Mention::OPEN,
        }
    }

    /// Token that closes a span of this kind (empty for `Raw`).
    pub fn end_token(self) -> &'static str {
        match self {
            TokenKind::Raw => "",
            TokenKind::Bold => Strong::TOKEN,
            TokenKind::Italic => Emphasis::TOKEN,
            TokenKind::Mention => Mention::CLOSE_TOKEN,
        }
    }

    /// Length of [`begin_token`](Self::begin_token) in UTF-16 units.
    ///
    /// All tokens are ASCII, so byte length and unit length agree.
    pub fn begin_len(self) -> usize {
        self.begin_token().len()
    }

    /// Length of [`end_token`](Self::end_token) in UTF-16 units.
    pub fn end_len(self) -> usize {
        self.end_token().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Raw => "raw",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Mention => "mention",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(TokenKind::Raw),
            "bold" => Ok(TokenKind::Bold),
            "italic" => Ok(TokenKind::Italic),
            "mention" => Ok(TokenKind::Mention),
            _ => Err(UnknownKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(TokenKind::Raw, "", "")]
    #[case(TokenKind::Bold, "*", "*")]
    #[case(TokenKind::Italic, "_", "_")]
    #[case(TokenKind::Mention, "@[", "]")]
    fn tokens_per_kind(#[case] kind: TokenKind, #[case] begin: &str, #[case] end: &str) {
        assert_eq!(kind.begin_token(), begin);
        assert_eq!(kind.end_token(), end);
        assert_eq!(kind.begin_len(), begin.len());
        assert_eq!(kind.end_len(), end.len());
    }

    #[test]
    fn mention_is_the_only_kind_with_distinct_tokens() {
        let distinct: Vec<_> = TokenKind::STYLED
            .into_iter()
            .filter(|k| k.begin_token() != k.end_token())
            .collect();
        assert_eq!(distinct, vec![TokenKind::Mention]);
    }

    #[rstest]
    #[case("bold", TokenKind::Bold)]
    #[case("Italic", TokenKind::Italic)]
    #[case("MENTION", TokenKind::Mention)]
    #[case("raw", TokenKind::Raw)]
    fn parses_kind_names(#[case] input: &str, #[case] expected: TokenKind) {
        assert_eq!(input.parse::<TokenKind>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_kind_name() {
        let err = "underline".parse::<TokenKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token kind `underline`");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(TokenKind::Mention.to_string(), "mention");
    }
}
