//! Editing buffer used while a text box is in edit mode.
//!
//! `TextEditState` holds the live text as characters, a caret, and an
//! optional selection anchor.  Text may span several lines; `\n` is an
//! ordinary character.  Insertions and deletions replace the selection when
//! one exists, the way a browser's editable region behaves after select-all.

/// Multi-line editing state with a caret and selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditState {
    chars: Vec<char>,
    cursor: usize,
    anchor: Option<usize>,
}

impl TextEditState {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replace the text, put the caret at the end, and drop the selection.
    pub fn set_value(&mut self, s: &str) {
        self.chars = s.chars().collect();
        self.cursor = self.chars.len();
        self.anchor = None;
    }

    /// The character buffer.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Caret position (char index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the caret, clamped to `0..=len`, dropping the selection.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
        self.anchor = None;
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Select the whole text, caret at the end.
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.chars.len();
    }

    /// The selected range `(start, end)`, if any non-empty selection exists.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        let (start, end) = if anchor <= self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        };
        (start < end).then_some((start, end))
    }

    /// Drop the selection, keeping the caret where it is.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Delete the selected text. Returns whether anything was deleted.
    pub fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        self.chars.drain(start..end);
        self.cursor = start;
        self.anchor = None;
        true
    }

    /// Type a character at the caret, replacing the selection.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Insert a string at the caret, replacing the selection.
    /// Returns the number of characters inserted.
    pub fn insert_str(&mut self, s: &str) -> usize {
        self.delete_selection();
        let before = self.chars.len();
        self.chars.splice(self.cursor..self.cursor, s.chars());
        let inserted = self.chars.len() - before;
        self.cursor += inserted;
        inserted
    }

    /// Backspace. Returns whether anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete key. Returns whether anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the word before the caret. Returns whether anything was deleted.
    pub fn delete_word_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let end = self.cursor;
        self.word_left();
        if self.cursor == end {
            return false;
        }
        self.chars.drain(self.cursor..end);
        true
    }

    /// Caret one character left; collapses a selection to its start.
    pub fn move_left(&mut self) {
        match self.selection() {
            Some((start, _)) => self.cursor = start,
            None => self.cursor = self.cursor.saturating_sub(1),
        }
        self.anchor = None;
    }

    /// Caret one character right; collapses a selection to its end.
    pub fn move_right(&mut self) {
        match self.selection() {
            Some((_, end)) => self.cursor = end,
            None => self.cursor = (self.cursor + 1).min(self.chars.len()),
        }
        self.anchor = None;
    }

    /// Caret to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.anchor = None;
    }

    /// Caret to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
        self.anchor = None;
    }

    /// Caret to the previous word boundary.
    pub fn word_left(&mut self) {
        self.anchor = None;
        while self.cursor > 0 && !self.chars[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.chars[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
    }

    /// Caret to the next word boundary.
    pub fn word_right(&mut self) {
        self.anchor = None;
        let len = self.chars.len();
        while self.cursor < len && self.chars[self.cursor].is_alphanumeric() {
            self.cursor += 1;
        }
        while self.cursor < len && !self.chars[self.cursor].is_alphanumeric() {
            self.cursor += 1;
        }
    }

    fn line_start(&self, pos: usize) -> usize {
        self.chars[..pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.chars[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |i| pos + i)
    }
}
