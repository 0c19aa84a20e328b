//! Flat markup rendering of a paragraph.
//!
//! Raw runs are copied verbatim and are NOT escaped: paragraphs come from the
//! note's own author. Styled kinds become `<span class="...">` wrappers; a
//! kind without a class is passed through with no wrapper at all. Tokens
//! themselves never appear in the output.

use html_escape::encode_double_quoted_attribute;

use crate::{
    parsing::{Edge, Marker, TokenKind, parse},
    text,
};

/// Class names wrapped around each styled kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyles {
    pub bold: Option<String>,
    pub italic: Option<String>,
    pub mention: Option<String>,
}

impl Default for RenderStyles {
    fn default() -> Self {
        Self {
            bold: Some("bold".to_string()),
            italic: Some("italic".to_string()),
            mention: None,
        }
    }
}

impl RenderStyles {
    pub fn class_for(&self, kind: TokenKind) -> Option<&str> {
        match kind {
            TokenKind::Raw => None,
            TokenKind::Bold => self.bold.as_deref(),
            TokenKind::Italic => self.italic.as_deref(),
            TokenKind::Mention => self.mention.as_deref(),
        }
    }
}

/// Renders `content` with the default classes.
pub fn render(content: &str) -> String {
    render_with(content, &RenderStyles::default())
}

/// Renders `content`, wrapping styled runs in spans carrying `styles`.
pub fn render_with(content: &str, styles: &RenderStyles) -> String {
    let markers = parse(content);
    render_markers(content, &markers, styles)
}

/// Renders an already lexed `content`.
pub fn render_markers(content: &str, markers: &[Marker], styles: &RenderStyles) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < markers.len() {
        let m = markers[i];
        i += 1;

        if m.kind == TokenKind::Raw {
            // The lexer always follows a raw begin with its end; the end
            // index is inclusive.
            let end = match markers.get(i) {
                Some(next) if next.is_end_of(TokenKind::Raw) => {
                    i += 1;
                    next.index + 1
                }
                _ => text::utf16_len(content),
            };
            out.push_str(&text::slice(content, m.index..end));
            continue;
        }

        let Some(class) = styles.class_for(m.kind) else {
            continue;
        };
        match m.edge {
            Edge::Begin => {
                out.push_str("<span class=\"");
                out.push_str(&encode_double_quoted_attribute(class));
                out.push_str("\">");
            }
            Edge::End => out.push_str("</span>"),
        }
    }

    out
}
