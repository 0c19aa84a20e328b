//! Non-interactive commands: dump markers, spans or rendered markup.

use notemark_config::RenderConfig;
use notemark_engine::{
    RenderStyles, TokenKind, parse, parsing::content_inside, render_with, spans_of_kind,
};

pub fn styles_from_config(config: &RenderConfig) -> RenderStyles {
    RenderStyles {
        bold: config.bold().map(str::to_string),
        italic: config.italic().map(str::to_string),
        mention: config.mention().map(str::to_string),
    }
}

/// One marker per line, as `(Edge, Kind, index)`.
pub fn markers(content: &str) -> String {
    parse(content).iter().map(|m| format!("{m}\n")).collect()
}

/// One span per line: outside range, inside range and content.
pub fn spans(kind: TokenKind, content: &str) -> String {
    spans_of_kind(kind, &parse(content))
        .iter()
        .map(|s| {
            format!(
                "{kind} {:?} inside {:?} {:?}\n",
                s.outside(),
                s.inside(),
                content_inside(content, s)
            )
        })
        .collect()
}

pub fn render(content: &str, config: &RenderConfig) -> String {
    render_with(content, &styles_from_config(config))
}
