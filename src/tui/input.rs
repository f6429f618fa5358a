//! Keyboard helpers and the single-line text buffer behind each form input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Ctrl+C quits from any mode.
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn cell_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Text broken into rows for a fixed-width box, with the cursor located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    /// Cursor position in terminal cells from the start of its row
    pub cursor_column: usize,
}

/// Editable text with a cursor measured in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial content and the cursor at the end
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters from the start
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert pasted text at the cursor.
    ///
    /// Buffers hold one line, so line breaks and tabs become spaces and
    /// other control characters are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert(' '),
                c if c.is_control() => {}
                c => self.insert(c),
            }
        }
    }

    /// Terminal cells taken by the text before the cursor
    pub fn cursor_column(&self) -> usize {
        self.content.chars().take(self.cursor).map(cell_width).sum()
    }

    /// Cells to skip so the cursor stays inside a one-line box `width` cells wide
    pub fn horizontal_scroll(&self, width: u16) -> u16 {
        let width = usize::from(width);
        if width == 0 {
            return 0;
        }
        let offset = self.cursor_column().saturating_sub(width - 1);
        u16::try_from(offset).unwrap_or(u16::MAX)
    }

    /// Break the content into rows of at most `width` cells.
    ///
    /// Rows break between characters, not words, so every cell maps back
    /// to one position in the buffer.
    pub fn wrap(&self, width: u16) -> WrappedText {
        let width = usize::from(width.max(1));
        let mut rows = vec![String::new()];
        let mut row_width = 0;
        let mut cursor = (0, 0);

        for (i, c) in self.content.chars().enumerate() {
            let w = cell_width(c);
            if row_width > 0 && row_width + w > width {
                rows.push(String::new());
                row_width = 0;
            }
            if i == self.cursor {
                cursor = (rows.len() - 1, row_width);
            }
            if let Some(row) = rows.last_mut() {
                row.push(c);
            }
            row_width += w;
        }

        if self.cursor >= self.char_count() {
            if row_width >= width {
                rows.push(String::new());
                row_width = 0;
            }
            cursor = (rows.len() - 1, row_width);
        }

        WrappedText {
            rows,
            cursor_row: cursor.0,
            cursor_column: cursor.1,
        }
    }

    /// Apply an editing key. Returns true when the content changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let before = self.content.len();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                return true;
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
        self.content.len() != before
    }
}
