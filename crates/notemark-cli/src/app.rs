use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notemark_engine::{
    MentionSearch, User, accept_user_mention, mention_at_cursor, parsing::content_inside,
    resolve_edit, text,
};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// A note being edited: its paragraphs, which one has focus, the caret in
/// it, and mention completion.
pub struct App {
    pub paragraphs: Vec<String>,
    pub focus: usize,
    /// UTF-16 unit offset into the focused paragraph.
    pub cursor: usize,
    pub users: Vec<User>,
    pub completion: MentionSearch,
}

impl App {
    pub fn new(users: Vec<User>, search_limit: usize) -> Self {
        let mut completion = MentionSearch::new(search_limit);
        completion.stop(&users);
        Self {
            paragraphs: vec![String::new()],
            focus: 0,
            cursor: 0,
            users,
            completion,
        }
    }

    pub fn current(&self) -> &str {
        &self.paragraphs[self.focus]
    }

    /// The whole note, one paragraph per line.
    pub fn note_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Control::Quit,
                _ => Control::Continue,
            };
        }

        let completing = self.completion.is_active();
        match key.code {
            KeyCode::Enter => {
                if !(completing && self.accept_selected()) {
                    self.new_paragraph_below_focus();
                }
            }
            KeyCode::Tab if completing => {
                self.accept_selected();
            }
            KeyCode::Esc => self.completion.stop(&self.users),
            KeyCode::Up if completing => {
                self.completion.select_previous();
            }
            KeyCode::Down if completing => {
                self.completion.select_next();
            }
            KeyCode::Up => self.focus_paragraph(self.focus.saturating_sub(1)),
            KeyCode::Down => self.focus_paragraph(self.focus + 1),
            KeyCode::Left => self.move_caret(text::prev_boundary(self.current(), self.cursor)),
            KeyCode::Right => self.move_caret(text::next_boundary(self.current(), self.cursor)),
            KeyCode::Home => self.move_caret(0),
            KeyCode::End => self.move_caret(text::utf16_len(self.current())),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
        Control::Continue
    }

    fn type_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let new_text = text::insert(self.current(), self.cursor, c.encode_utf8(&mut buf));
        self.apply_change(new_text, self.cursor + c.len_utf16());
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = text::prev_boundary(self.current(), self.cursor);
        let new_text = text::splice(self.current(), start..self.cursor, "");
        self.apply_change(new_text, start);
    }

    /// Runs a changed paragraph through bracket completion and updates the
    /// mention search for wherever the caret ended up.
    fn apply_change(&mut self, new_text: String, new_cursor: usize) {
        let resolved = resolve_edit(self.current(), &new_text, new_cursor);
        self.paragraphs[self.focus] = resolved.edit.text;
        self.cursor = resolved.edit.cursor;

        match resolved.search {
            Some(search) => self.completion.start_or_continue(&self.users, &search),
            None => self.completion.stop(&self.users),
        }
    }

    fn move_caret(&mut self, to: usize) {
        self.cursor = to;
        match mention_at_cursor(self.current(), self.cursor) {
            Some(mention) => {
                let search = content_inside(self.current(), &mention).to_lowercase();
                if !self.completion.is_active() || self.completion.search() != search {
                    self.completion.start_or_continue(&self.users, &search);
                }
            }
            None => self.completion.stop(&self.users),
        }
    }

    /// Fills the mention under the caret with the highlighted user.
    fn accept_selected(&mut self) -> bool {
        let Some(user) = self.completion.selected_user().cloned() else {
            return false;
        };

        let accepted = match accept_user_mention(self.cursor, self.current(), &user) {
            Ok(edit) => {
                self.paragraphs[self.focus] = edit.text;
                self.cursor = edit.cursor;
                true
            }
            Err(e) => {
                log::warn!("Could not insert mention for {}: {e}", user.username);
                false
            }
        };
        self.completion.stop(&self.users);
        accepted
    }

    fn new_paragraph_below_focus(&mut self) {
        self.completion.stop(&self.users);
        self.paragraphs.insert(self.focus + 1, String::new());
        self.focus += 1;
        self.cursor = 0;
    }

    fn focus_paragraph(&mut self, index: usize) {
        self.completion.stop(&self.users);
        self.focus = index.min(self.paragraphs.len() - 1);
        self.cursor = text::utf16_len(self.current());
    }
}
