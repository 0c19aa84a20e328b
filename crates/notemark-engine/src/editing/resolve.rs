use super::{brackets::auto_insert_mention_brackets, edit::Edit, mention::mention_at_cursor};
use crate::{parsing::Span, text};

/// Outcome of one keystroke in a paragraph input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdit {
    pub edit: Edit,
    /// The mention holding the caret after the edit, if any.
    pub mention: Option<Span>,
    /// Lowercased content of `mention`, ready for a directory search.
    pub search: Option<String>,
}

/// Applies bracket completion to a change and finds the mention the caret
/// ends up in.
pub fn resolve_edit(old_text: &str, new_text: &str, new_cursor: usize) -> ResolvedEdit {
    let edit = auto_insert_mention_brackets(old_text, new_text, new_cursor);
    let mention = mention_at_cursor(&edit.text, edit.cursor);
    // Directory data is lowercase; capitalisation is only presentation.
    let search = mention.map(|m| text::slice(&edit.text, m.inside()).to_lowercase());

    log::debug!(
        "resolved edit: cursor {} -> {}, search {search:?}",
        new_cursor,
        edit.cursor
    );

    ResolvedEdit {
        edit,
        mention,
        search,
    }
}
