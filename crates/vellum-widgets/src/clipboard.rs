//! Clipboard payloads delivered with paste events.
//!
//! A paste may carry several representations of the same content keyed by
//! format (`text/plain`, `text/html`, the legacy `Text` entry, ...).  Text
//! boxes only ever insert plain text, so pasted content always takes on the
//! box's own styling.

use std::collections::BTreeMap;

use crate::runeutil::sanitize;

/// The plain-text format key.
pub const PLAIN_TEXT: &str = "text/plain";
/// The legacy plain-text key some sources still use.
pub const LEGACY_TEXT: &str = "Text";
/// The rich-text format key. Never inserted.
pub const HTML: &str = "text/html";

/// Content of one paste event, keyed by format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardData {
    entries: BTreeMap<String, String>,
}

impl ClipboardData {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// A payload with only a plain-text entry (what a terminal paste delivers).
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(PLAIN_TEXT, text)
    }

    /// Add or replace the entry for `format`.
    pub fn with(mut self, format: impl Into<String>, data: impl Into<String>) -> Self {
        self.entries.insert(format.into(), data.into());
        self
    }

    /// Raw entry for `format`.
    pub fn get(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    /// The plain text to insert: `text/plain`, else the legacy `Text` entry,
    /// sanitized.  Rich entries are ignored; `None` when there is no plain
    /// text at all.
    pub fn plain_text(&self) -> Option<String> {
        self.get(PLAIN_TEXT)
            .or_else(|| self.get(LEGACY_TEXT))
            .map(sanitize)
    }
}

impl From<String> for ClipboardData {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
