use crate::util::unicode;

/// Single-line text input with a grapheme-aligned byte cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        TextBuffer::default()
    }

    /// Buffer holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        TextBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal column of the cursor
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.text, self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        match unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            Some(start) => {
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        match unicode::next_grapheme_boundary(&self.text, self.cursor) {
            Some(end) => {
                self.text.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    /// Delete back to the start of the previous word. Returns whether text changed.
    pub fn delete_word_left(&mut self) -> bool {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        if start == self.cursor {
            return false;
        }
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}
