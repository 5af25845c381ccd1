/// Search input state for the TUI.
///
/// The query text itself lives in the view state; this only tracks the
/// cursor and focus. Editing methods return `true` when the text changed,
/// which is what re-arms the debounced search.
pub struct SearchState {
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    pub fn insert(&mut self, text: &mut String, c: char) -> bool {
        let pos = self.cursor_pos.min(text.len());
        text.insert(pos, c);
        self.cursor_pos = pos + c.len_utf8();
        true
    }

    pub fn backspace(&mut self, text: &mut String) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        // Find the previous character boundary
        let prev = text[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        text.remove(prev);
        self.cursor_pos = prev;
        true
    }

    pub fn delete(&mut self, text: &mut String) -> bool {
        if self.cursor_pos >= text.len() {
            return false;
        }
        text.remove(self.cursor_pos);
        true
    }

    pub fn clear(&mut self, text: &mut String) -> bool {
        self.cursor_pos = 0;
        if text.is_empty() {
            return false;
        }
        text.clear();
        true
    }

    pub fn move_left(&mut self, text: &str) {
        if self.cursor_pos > 0 {
            self.cursor_pos = text[..self.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self, text: &str) {
        if self.cursor_pos < text.len() {
            self.cursor_pos = text[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.cursor_pos = text.len();
    }

    /// Display column of the cursor, for placing the terminal cursor
    pub fn cursor_column(&self, text: &str) -> u16 {
        unicode_width::UnicodeWidthStr::width(&text[..self.cursor_pos.min(text.len())]) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_editing() {
        let mut state = SearchState::default();
        let mut text = String::new();

        assert!(state.insert(&mut text, 'a'));
        assert!(state.insert(&mut text, 'b'));
        assert_eq!(text, "ab");

        state.move_left(&text);
        assert!(state.insert(&mut text, 'x'));
        assert_eq!(text, "axb");

        assert!(state.backspace(&mut text));
        assert_eq!(text, "ab");
        assert!(state.delete(&mut text));
        assert_eq!(text, "a");
        assert!(!state.delete(&mut text));
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut state = SearchState::default();
        let mut text = String::new();
        state.insert(&mut text, 'é');
        state.insert(&mut text, 'e');
        state.move_home();
        state.move_right(&text);
        assert_eq!(state.cursor_pos, 'é'.len_utf8());
        assert!(state.backspace(&mut text));
        assert_eq!(text, "e");
    }

    #[test]
    fn clear_reports_change_only_when_non_empty() {
        let mut state = SearchState::default();
        let mut text = String::from("phone");
        state.move_end(&text);
        assert!(state.clear(&mut text));
        assert!(!state.clear(&mut text));
        assert_eq!(state.cursor_pos, 0);
    }
}
