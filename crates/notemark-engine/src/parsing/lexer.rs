use super::{
    kinds::{Emphasis, Mention, Strong, TokenKind},
    marker::{Edge, Marker},
    scanner::Scanner,
};

/// Which runs are currently open during one [`parse`] call.
#[derive(Debug, Default)]
struct OpenMarks {
    raw: bool,
    bold: bool,
    italic: bool,
    mention: bool,
}

impl OpenMarks {
    fn flag(&mut self, kind: TokenKind) -> &mut bool {
        match kind {
            TokenKind::Raw => &mut self.raw,
            TokenKind::Bold => &mut self.bold,
            TokenKind::Italic => &mut self.italic,
            TokenKind::Mention => &mut self.mention,
        }
    }
}

/// Collects markers while scanning.
struct Lexer {
    marks: OpenMarks,
    out: Vec<Marker>,
}

impl Lexer {
    /// Closes the current raw run; `i` is the offset of the unit that ended it.
    fn end_raw(&mut self, i: usize) {
        if self.marks.raw {
            self.marks.raw = false;
            self.out.push(Marker::end(TokenKind::Raw, i - 1));
        }
    }

    fn toggle(&mut self, kind: TokenKind, i: usize) {
        let open = self.marks.flag(kind);
        let edge = if *open { Edge::End } else { Edge::Begin };
        *open = !*open;
        self.out.push(Marker::new(edge, kind, i));
    }

    /// Absorbs a plain unit, opening a raw run if none is open.
    fn plain(&mut self, i: usize) {
        if !self.marks.raw {
            self.marks.raw = true;
            self.out.push(Marker::begin(TokenKind::Raw, i));
        }
    }
}

/// Lexes `content` into an ordered sequence of [`Marker`]s.
///
/// A single left-to-right pass over UTF-16 units:
/// - `*` and `_` toggle bold and italic
/// - `@[` opens a mention while none is open (the `[` is consumed)
/// - `]` closes an open mention
/// - everything else joins the current raw run
///
/// Every toggle first closes the raw run it interrupts, so an `End Raw`
/// always directly precedes the marker that terminated it. Styled spans left
/// open at end of input get no closing marker.
pub fn parse(content: &str) -> Vec<Marker> {
    let mut sc = Scanner::new(content);
    let mut lx = Lexer {
        marks: OpenMarks::default(),
        out: Vec::new(),
    };

    while let Some(u) = sc.peek() {
        let i = sc.pos();
        match u {
            Strong::TOGGLE => {
                lx.end_raw(i);
                lx.toggle(TokenKind::Bold, i);
            }
            Emphasis::TOGGLE => {
                lx.end_raw(i);
                lx.toggle(TokenKind::Italic, i);
            }
            Mention::TRIGGER
                if !lx.marks.mention && sc.peek_next() == Some(Mention::BRACKET_OPEN) =>
            {
                lx.end_raw(i);
                lx.toggle(TokenKind::Mention, i);
                sc.bump(); // [
            }
            Mention::BRACKET_CLOSE if lx.marks.mention => {
                lx.end_raw(i);
                lx.toggle(TokenKind::Mention, i);
            }
            _ => lx.plain(i),
        }
        sc.bump();
    }

    lx.end_raw(sc.len());

    log::trace!("lexed {} markers from {} units", lx.out.len(), sc.len());
    lx.out
}
