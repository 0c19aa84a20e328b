//! # Inline Markup Parsing
//!
//! Single-pass lexing of note paragraphs into begin/end markers, and the span
//! index built on top of it.
//!
//! ## Token Surface
//!
//! | kind    | begin | end |
//! |---------|-------|-----|
//! | bold    | `*`   | `*` |
//! | italic  | `_`   | `_` |
//! | mention | `@[`  | `]` |
//!
//! There is no escape sequence; anything else is raw text.
//!
//! ## Modules
//!
//! - **`kinds`**: `TokenKind` plus the delimiter constants each kind owns
//! - **`marker`**: `Marker` / `Edge`, the lexer's output
//! - **`scanner`**: `Scanner` for unit-by-unit scanning with lookahead
//! - **`lexer`**: `parse()` entry point
//! - **`spans`**: `Span`, `spans_of_kind()`, `span_at_cursor()`
//!
//! ## Offsets
//!
//! Every offset counts UTF-16 code units, matching the selection offsets of
//! a browser text input. Markers and spans are recomputed from scratch on
//! every change; nothing is cached between calls.

pub mod kinds;
pub mod lexer;
pub mod marker;
pub mod scanner;
pub mod spans;

pub use kinds::TokenKind;
pub use lexer::parse;
pub use marker::{Edge, Marker};
pub use spans::{Span, content_inside, find_span_at, span_at_cursor, spans_of_kind};
