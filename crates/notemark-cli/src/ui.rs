use notemark_engine::{Edge, TokenKind, parse, text};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

const FOCUS_PREFIX: &str = "> ";
const PREFIX: &str = "  ";

/// Styled runs of a paragraph: tokens hidden, raw text styled by the marks
/// open around it.
pub fn styled_line(content: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut raw_start = 0;
    let (mut bold, mut italic, mut mention) = (false, false, false);

    for m in parse(content) {
        let open = m.edge == Edge::Begin;
        match m.kind {
            TokenKind::Raw if open => raw_start = m.index,
            TokenKind::Raw => spans.push(Span::styled(
                text::slice(content, raw_start..m.index + 1),
                run_style(bold, italic, mention),
            )),
            TokenKind::Bold => bold = open,
            TokenKind::Italic => italic = open,
            TokenKind::Mention => mention = open,
        }
    }

    Line::from(spans)
}

fn run_style(bold: bool, italic: bool, mention: bool) -> Style {
    let mut style = Style::default();
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if mention {
        style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
    }
    style
}

pub fn draw(f: &mut Frame, app: &App) {
    let completion_height = if app.completion.is_active() {
        app.completion.visible().len().max(1) as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(completion_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Note panel: focused paragraph raw, the others rendered
    let lines: Vec<Line> = app
        .paragraphs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == app.focus {
                Line::from(vec![Span::raw(FOCUS_PREFIX), Span::raw(p.clone())])
            } else {
                let mut line = styled_line(p);
                line.spans.insert(0, Span::raw(PREFIX));
                line
            }
        })
        .collect();
    let note = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Note"));
    f.render_widget(note, chunks[0]);

    let caret_col = text::slice(app.current(), 0..app.cursor).chars().count();
    let x = chunks[0].x + 1 + FOCUS_PREFIX.len() as u16 + caret_col as u16;
    let y = chunks[0].y + 1 + app.focus as u16;
    f.set_cursor_position((x, y));

    if app.completion.is_active() {
        let items: Vec<ListItem> = if app.completion.visible().is_empty() {
            vec![ListItem::new("no matching users")]
        } else {
            app.completion
                .visible()
                .iter()
                .map(|u| ListItem::new(format!("{} (@{})", u.full_name(), u.username)))
                .collect()
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Mention"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
        let mut state = ListState::default();
        if !app.completion.visible().is_empty() {
            state.select(Some(app.completion.selected()));
        }
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    let help = Line::from(vec![
        Span::raw("Ctrl-Q: Quit | "),
        Span::raw("@: Mention | "),
        Span::raw("Enter/Tab: Accept or new paragraph | "),
        Span::raw("↑/↓: Move"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
