use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest query the search bar accepts, in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Single-line text input behind the `/` search bar.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: String,
    /// Byte offset, always on a char boundary.
    cursor: usize,
}

impl SearchInput {
    pub fn new(text: impl Into<String>) -> Self {
        let mut text: String = text.into();
        if let Some((i, _)) = text.char_indices().nth(MAX_QUERY_CHARS) {
            text.truncate(i);
        }
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns `true` when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = self.cursor > 0;
                self.text.drain(..self.cursor);
                self.cursor = 0;
                changed
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let start = word_start(&self.text, self.cursor);
                let changed = start < self.cursor;
                self.text.drain(start..self.cursor);
                self.cursor = start;
                changed
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                if self.text.chars().count() >= MAX_QUERY_CHARS {
                    return false;
                }
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = prev_char_boundary_of(&self.text, self.cursor);
                self.text.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.text.len() {
                    return false;
                }
                let next = next_char_boundary_of(&self.text, self.cursor);
                self.text.drain(self.cursor..next);
                true
            }
            KeyCode::Left => {
                self.cursor = prev_char_boundary_of(&self.text, self.cursor);
                false
            }
            KeyCode::Right => {
                self.cursor = next_char_boundary_of(&self.text, self.cursor);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.len();
                false
            }
            _ => false,
        }
    }
}

fn prev_char_boundary_of(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary_of(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Start of the word ending at `pos`, skipping trailing whitespace first.
fn word_start(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let trimmed = before.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(s: &str) -> SearchInput {
        let mut input = SearchInput::default();
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = typed("pts");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(key(KeyCode::Char('e'))));
        assert_eq!(input.value(), "pets");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut input = typed("café");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "caf");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = SearchInput::default();
        assert!(!input.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = typed("ab");
        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "b");
        assert!(!input.handle_key(key(KeyCode::End)));
        assert!(!input.handle_key(key(KeyCode::Delete)));
    }

    #[test]
    fn test_length_limit() {
        let mut input = typed(&"x".repeat(MAX_QUERY_CHARS));
        assert!(!input.handle_key(key(KeyCode::Char('y'))));
        assert_eq!(input.value().chars().count(), MAX_QUERY_CHARS);
    }

    #[test]
    fn test_new_truncates_long_text() {
        let input = SearchInput::new("é".repeat(MAX_QUERY_CHARS + 5));
        assert_eq!(input.value().chars().count(), MAX_QUERY_CHARS);
        assert_eq!(input.cursor(), input.value().len());
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut input = typed("list pets  ");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.value(), "list ");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut input = typed("owner");
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.value(), "r");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_other_control_chars_are_ignored() {
        let mut input = typed("a");
        assert!(!input.handle_key(ctrl('x')));
        assert_eq!(input.value(), "a");
    }
}
