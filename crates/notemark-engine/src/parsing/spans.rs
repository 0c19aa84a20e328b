use std::ops::Range;

use serde::Serialize;

use super::{kinds::TokenKind, marker::Marker};
use crate::text;

/// A matched begin/end pair of one kind.
///
/// ```text
/// `@[foo bar]`
///  1 2      34
///
/// 1 -> begin_outside
/// 2 -> begin_inside
/// 3 -> end_inside
/// 4 -> end_outside
/// ```
///
/// All offsets are UTF-16 units. `begin_*` are inclusive, `end_*` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Position of the `Begin` marker in the marker sequence.
    pub begin_marker: usize,
    /// Position of the matching `End` marker in the marker sequence.
    pub end_marker: usize,
    pub kind: TokenKind,
    /// First unit of the opening token.
    pub begin_outside: usize,
    /// First unit of the content.
    pub begin_inside: usize,
    /// One past the last unit of the content.
    pub end_inside: usize,
    /// One past the closing token, i.e. where the next run would begin.
    pub end_outside: usize,
}

impl Span {
    fn from_pair(
        kind: TokenKind,
        begin_marker: usize,
        begin: Marker,
        end_marker: usize,
        end: Marker,
    ) -> Self {
        // Both markers sit on the first unit of their token, so only the
        // begin side needs shifting past its token to reach the content.
        Self {
            begin_marker,
            end_marker,
            kind,
            begin_outside: begin.index,
            begin_inside: begin.index + kind.begin_len(),
            end_inside: end.index,
            end_outside: end.index + kind.end_len(),
        }
    }

    /// Content range, tokens excluded.
    pub fn inside(&self) -> Range<usize> {
        self.begin_inside..self.end_inside
    }

    /// Full range, tokens included.
    pub fn outside(&self) -> Range<usize> {
        self.begin_outside..self.end_outside
    }

    /// True when `cursor` rests within the content, either edge included.
    pub fn contains_cursor(&self, cursor: usize) -> bool {
        self.begin_inside <= cursor && cursor <= self.end_inside
    }
}

/// Pairs every `Begin` of `kind` with the nearest following `End` of `kind`.
///
/// Scanning resumes after each consumed `End`, so spans of one kind never
/// nest and the whole pass is linear. A `Begin` with no later `End` yields
/// nothing.
pub fn spans_of_kind(kind: TokenKind, markers: &[Marker]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < markers.len() {
        let begin = markers[i];
        if !begin.is_begin_of(kind) {
            i += 1;
            continue;
        }

        let Some(offset) = markers[i + 1..].iter().position(|m| m.is_end_of(kind)) else {
            // No `End` of this kind remains, so no later `Begin` can match either.
            break;
        };
        let j = i + 1 + offset;
        spans.push(Span::from_pair(kind, i, begin, j, markers[j]));
        i = j + 1;
    }

    spans
}

/// The first span of `kind` whose content contains `cursor`.
pub fn span_at_cursor(kind: TokenKind, cursor: usize, markers: &[Marker]) -> Option<Span> {
    find_span_at(cursor, &spans_of_kind(kind, markers)).copied()
}

/// Like [`span_at_cursor`], over spans that were already indexed.
pub fn find_span_at(cursor: usize, spans: &[Span]) -> Option<&Span> {
    spans.iter().find(|s| s.contains_cursor(cursor))
}

/// The content between a span's tokens.
pub fn content_inside(content: &str, span: &Span) -> String {
    text::slice(content, span.inside())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ROBOT: &str = "hello @[Mr. Robot]!";

    fn robot_span() -> Span {
        Span {
            begin_marker: 2,
            end_marker: 5,
            kind: TokenKind::Mention,
            begin_outside: 6,
            begin_inside: 8,
            end_inside: 17,
            end_outside: 18,
        }
    }

    #[test]
    fn mention_span_offsets() {
        let spans = spans_of_kind(TokenKind::Mention, &parse(ROBOT));
        assert_eq!(spans, vec![robot_span()]);
    }

    #[test]
    fn cursor_on_closing_bracket_is_inside() {
        let markers = parse(ROBOT);
        assert_eq!(
            span_at_cursor(TokenKind::Mention, 17, &markers),
            Some(robot_span())
        );
    }

    #[rstest]
    #[case(5, None)]
    #[case(6, None)]
    #[case(7, None)]
    #[case(8, Some(8))]
    #[case(12, Some(8))]
    #[case(17, Some(8))]
    #[case(18, None)]
    fn cursor_boundaries(#[case] cursor: usize, #[case] begin_inside: Option<usize>) {
        let found = span_at_cursor(TokenKind::Mention, cursor, &parse(ROBOT));
        assert_eq!(found.map(|s| s.begin_inside), begin_inside);
    }

    #[test]
    fn content_inside_mention() {
        assert_eq!(content_inside(ROBOT, &robot_span()), "Mr. Robot");
    }

    #[test]
    fn bold_spans_in_order() {
        let spans = spans_of_kind(TokenKind::Bold, &parse("*a* b *cd*"));
        let ranges: Vec<_> = spans.iter().map(Span::outside).collect();
        assert_eq!(ranges, vec![0..3, 6..10]);
        assert_eq!(spans[1].inside(), 7..9);
    }

    #[test]
    fn unmatched_begin_is_skipped() {
        let spans = spans_of_kind(TokenKind::Bold, &parse("*a* *open"));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].outside(), 0..3);
    }

    #[test]
    fn only_requested_kind_is_indexed() {
        let markers = parse("_a_ *b* @[c]");
        assert_eq!(spans_of_kind(TokenKind::Italic, &markers).len(), 1);
        assert_eq!(spans_of_kind(TokenKind::Bold, &markers).len(), 1);
        assert_eq!(spans_of_kind(TokenKind::Mention, &markers).len(), 1);
    }

    #[test]
    fn empty_mention_span() {
        let spans = spans_of_kind(TokenKind::Mention, &parse("@[]"));
        assert_eq!(spans[0].inside(), 2..2);
        assert!(spans[0].contains_cursor(2));
    }

    #[test]
    fn marker_positions_are_recorded() {
        let markers = parse("x *y*");
        let span = spans_of_kind(TokenKind::Bold, &markers)[0];
        assert!(markers[span.begin_marker].is_begin_of(TokenKind::Bold));
        assert!(markers[span.end_marker].is_end_of(TokenKind::Bold));
    }

    #[test]
    fn second_of_two_mentions() {
        let markers = parse("@[ann] and @[bob]");
        let spans = spans_of_kind(TokenKind::Mention, &markers);
        let found = find_span_at(14, &spans).copied();
        assert_eq!(found, Some(spans[1]));
        assert_eq!(find_span_at(8, &spans), None);
    }

    #[test]
    fn no_spans_without_markers() {
        assert!(spans_of_kind(TokenKind::Bold, &[]).is_empty());
        assert_eq!(span_at_cursor(TokenKind::Mention, 0, &[]), None);
    }
}
