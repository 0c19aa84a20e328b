use super::edit::Edit;
use crate::{
    error::EditError,
    mentions::User,
    parsing::{Span, TokenKind, find_span_at, parse, span_at_cursor, spans_of_kind},
    text,
};

/// Parses `paragraph` and returns the mention whose content holds `cursor`.
pub fn mention_at_cursor(paragraph: &str, cursor: usize) -> Option<Span> {
    span_at_cursor(TokenKind::Mention, cursor, &parse(paragraph))
}

/// Swaps the content of the mention under `cursor` for `replacement` and
/// puts the caret right after the mention's closing `]`.
///
/// The caller must have located a mention at `cursor` first; calling this
/// anywhere else is a bug and fails with [`EditError::NoMentionAtCursor`].
///
/// The new caret is found by parsing the updated text again rather than by
/// offset arithmetic. The mention is looked up at the original cursor and,
/// when a shorter replacement moved its end before that offset, at its
/// unchanged content start. Either hit must open where the original did.
pub fn replace_mention_content(
    cursor: usize,
    paragraph: &str,
    replacement: &str,
) -> Result<Edit, EditError> {
    let mention =
        mention_at_cursor(paragraph, cursor).ok_or(EditError::NoMentionAtCursor { cursor })?;

    let updated = text::splice(paragraph, mention.inside(), replacement);

    let spans = spans_of_kind(TokenKind::Mention, &parse(&updated));
    let same_mention = |at: usize| {
        find_span_at(at, &spans)
            .filter(|s| s.begin_outside == mention.begin_outside)
            .copied()
    };
    let relocated = same_mention(cursor)
        .or_else(|| same_mention(mention.begin_inside))
        .ok_or(EditError::MentionLost { cursor })?;

    log::debug!(
        "replaced mention {:?} with {replacement:?}, caret {cursor} -> {}",
        mention.outside(),
        relocated.end_outside
    );

    Ok(Edit::new(updated, relocated.end_outside))
}

/// Fills the mention under `cursor` with `user`'s full name.
pub fn accept_user_mention(cursor: usize, paragraph: &str, user: &User) -> Result<Edit, EditError> {
    replace_mention_content(cursor, paragraph, &user.full_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn replaces_and_moves_caret_past_bracket() {
        let paragraph = "foo @[bar] baz";
        let edit = replace_mention_content(9, paragraph, "bar the great").unwrap();

        let expected = "foo @[bar the great] baz";
        assert_eq!(edit.text, expected);
        assert_eq!(edit.cursor, expected.find(']').unwrap() + 1);
    }

    #[rstest]
    #[case::at_content_start(6)]
    #[case::mid_content(7)]
    #[case::at_closing_bracket(9)]
    fn any_caret_inside_works(#[case] cursor: usize) {
        let edit = replace_mention_content(cursor, "foo @[bar] baz", "Ann Lee").unwrap();
        assert_eq!(edit, Edit::new("foo @[Ann Lee] baz", 14));
    }

    #[test]
    fn fills_empty_brackets() {
        let edit = replace_mention_content(2, "@[]", "Ann Lee").unwrap();
        assert_eq!(edit, Edit::new("@[Ann Lee]", 10));
    }

    #[test]
    fn shorter_replacement_keeps_the_same_mention() {
        // The caret at 8 would land inside the second mention after shrinking.
        let edit = replace_mention_content(8, "@[abcdef]@[xyz]", "a").unwrap();
        assert_eq!(edit, Edit::new("@[a]@[xyz]", 4));
    }

    #[test]
    fn only_the_mention_under_the_caret_changes() {
        let edit = replace_mention_content(14, "@[ann] and @[bo]", "Bob Ray").unwrap();
        assert_eq!(edit, Edit::new("@[ann] and @[Bob Ray]", 21));
    }

    #[test]
    fn caret_outside_any_mention_is_an_error() {
        let err = replace_mention_content(1, "foo @[bar] baz", "x").unwrap_err();
        assert_eq!(err, EditError::NoMentionAtCursor { cursor: 1 });
    }

    #[test]
    fn closing_bracket_in_replacement_ends_the_mention_early() {
        // A `]` in the replacement closes the mention early; the caret lands
        // after that first `]`.
        let edit = replace_mention_content(3, "@[ab]", "x]y").unwrap();
        assert_eq!(edit, Edit::new("@[x]y]", 4));
    }

    #[test]
    fn accepts_user_full_name() {
        let user = User::new("ann", "ann", "lee");
        let edit = accept_user_mention(5, "hi @[a] !", &user).unwrap();
        assert_eq!(edit, Edit::new("hi @[ann lee] !", 13));
    }

    #[test]
    fn located_mention_matches_parse() {
        let found = mention_at_cursor("hello @[Mr. Robot]!", 17).unwrap();
        assert_eq!(found.inside(), 8..17);
        assert_eq!(mention_at_cursor("hello @[Mr. Robot]!", 3), None);
    }
}
