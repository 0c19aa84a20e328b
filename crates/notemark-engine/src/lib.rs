pub mod editing;
pub mod error;
pub mod mentions;
pub mod parsing;
pub mod render;
pub mod text;

// Re-export key types for easier usage
pub use editing::{
    Edit, ResolvedEdit, accept_user_mention, auto_insert_mention_brackets, mention_at_cursor,
    replace_mention_content, resolve_edit,
};
pub use error::{EditError, UnknownKindError};
pub use mentions::{DEFAULT_SEARCH_LIMIT, MentionSearch, User, UserDirectory, sort_users};
pub use parsing::{Edge, Marker, Span, TokenKind, parse, span_at_cursor, spans_of_kind};
pub use render::{RenderStyles, render, render_with};
