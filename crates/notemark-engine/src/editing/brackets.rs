use super::edit::Edit;
use crate::{parsing::kinds::Mention, text};

/// Completes a freshly typed `@` into `@[]` and moves the caret between the
/// brackets.
///
/// Fires only when the text did not shrink (a deletion that leaves `@` before
/// the caret is not a new trigger) and the unit before `new_cursor` is `@`.
/// An already present `[` is reused rather than doubled; the caret advances
/// by one either way. Otherwise `new_text` and `new_cursor` come back as is.
pub fn auto_insert_mention_brackets(old_text: &str, new_text: &str, new_cursor: usize) -> Edit {
    let grew = text::utf16_len(new_text) >= text::utf16_len(old_text);
    let after_trigger = new_cursor
        .checked_sub(1)
        .and_then(|i| text::unit_at(new_text, i))
        == Some(Mention::TRIGGER);

    if !(grew && after_trigger) {
        return Edit::new(new_text, new_cursor);
    }

    let text = if text::unit_at(new_text, new_cursor) == Some(Mention::BRACKET_OPEN) {
        new_text.to_string()
    } else {
        log::debug!("inserting mention brackets at {new_cursor}");
        text::insert(new_text, new_cursor, Mention::BRACKETS)
    };

    Edit::new(text, new_cursor + 1)
}
