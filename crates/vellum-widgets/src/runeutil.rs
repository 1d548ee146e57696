//! Unicode text utilities for terminal rendering.
//!
//! Sanitizing untrusted text, measuring display width, and wrapping text
//! into lines that keep track of the character ranges they cover (so a caret
//! index can be mapped to a screen position).

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clean text that came from outside the editor (clipboard, files).
///
/// - Terminal escape sequences (CSI, OSC, and two-byte escapes) are removed,
///   so pasted text cannot smuggle colors or cursor movement in.
/// - `\r\n` and lone `\r` become `\n`.
/// - Other control characters are dropped; `\n` and `\t` are kept.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => match chars.next() {
                // CSI: parameters then a final byte in 0x40..=0x7E
                Some('[') => {
                    for c in chars.by_ref() {
                        if ('\u{40}'..='\u{7e}').contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: terminated by BEL or ST (ESC \)
                Some(']') => {
                    while let Some(c) = chars.next() {
                        if c == '\u{7}' {
                            break;
                        }
                        if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' | '\t' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Display width of one character in terminal cells.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// A wrapped line as a half-open range of character indices.
///
/// Ranges never include the `\n` that ended a paragraph.  Trailing spaces at
/// a soft wrap stay on the line they follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First character index.
    pub start: usize,
    /// One past the last character index.
    pub end: usize,
}

impl LineRange {
    /// Number of characters on the line.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Wrap `chars` into lines no wider than `width` cells.
///
/// Every paragraph (text between `\n`s) yields at least one line.  With
/// `break_anywhere` lines break between any two characters; otherwise they
/// break after the last space that fits, falling back to a hard break for
/// words longer than the line.  A `width` of zero disables wrapping.
pub fn wrap_lines(chars: &[char], width: usize, break_anywhere: bool) -> Vec<LineRange> {
    let mut lines = Vec::new();
    let mut start = 0;
    for i in 0..=chars.len() {
        if i == chars.len() || chars[i] == '\n' {
            wrap_paragraph(chars, start, i, width, break_anywhere, &mut lines);
            start = i + 1;
        }
    }
    lines
}

fn wrap_paragraph(
    chars: &[char],
    start: usize,
    end: usize,
    width: usize,
    break_anywhere: bool,
    out: &mut Vec<LineRange>,
) {
    if width == 0 {
        out.push(LineRange { start, end });
        return;
    }

    let mut line_start = start;
    let mut used = 0;
    let mut last_break: Option<usize> = None;
    let mut i = start;
    while i < end {
        let c = chars[i];
        let w = char_width(c);
        if used + w > width && i > line_start {
            if c == ' ' && !break_anywhere {
                // spaces may hang past the edge
                used += w;
                i += 1;
                last_break = Some(i);
                continue;
            }
            let cut = match last_break {
                Some(b) if !break_anywhere && b > line_start => b,
                _ => i,
            };
            out.push(LineRange {
                start: line_start,
                end: cut,
            });
            line_start = cut;
            used = chars[cut..i].iter().map(|&c| char_width(c)).sum();
            last_break = None;
            continue;
        }
        used += w;
        i += 1;
        if c == ' ' {
            last_break = Some(i);
        }
    }
    out.push(LineRange {
        start: line_start,
        end,
    });
}

/// Map a caret index to `(row, column-in-chars)` within wrapped `lines`.
///
/// A caret sitting exactly on a soft wrap belongs to the following line.
pub fn locate(lines: &[LineRange], cursor: usize) -> (usize, usize) {
    let row = lines
        .iter()
        .rposition(|line| line.start <= cursor)
        .unwrap_or(0);
    match lines.get(row) {
        Some(line) => (row, cursor.min(line.end).saturating_sub(line.start)),
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn texts(s: &str, lines: &[LineRange]) -> Vec<String> {
        let cs = chars(s);
        lines
            .iter()
            .map(|l| cs[l.start..l.end].iter().collect())
            .collect()
    }

    #[test]
    fn sanitize_strips_escape_sequences() {
        assert_eq!(sanitize("\u{1b}[1;31mred\u{1b}[0m"), "red");
        assert_eq!(sanitize("a\u{1b}]0;title\u{7}b"), "ab");
        assert_eq!(sanitize("a\u{1b}]8;;http://x\u{1b}\\b"), "ab");
    }

    #[test]
    fn sanitize_normalizes_line_endings() {
        assert_eq!(sanitize("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn sanitize_keeps_tabs_drops_other_controls() {
        assert_eq!(sanitize("a\tb\u{0}c\u{8}"), "a\tbc");
    }

    #[test]
    fn widths_account_for_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(char_width('\u{0}'), 0);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        let s = "hello";
        let lines = wrap_lines(&chars(s), 10, false);
        assert_eq!(texts(s, &lines), vec!["hello"]);
    }

    #[test]
    fn wrap_splits_on_newlines() {
        let s = "ab\n\ncd";
        let lines = wrap_lines(&chars(s), 10, false);
        assert_eq!(texts(s, &lines), vec!["ab", "", "cd"]);
    }

    #[test]
    fn wrap_breaks_after_spaces() {
        let s = "the quick brown fox";
        let lines = wrap_lines(&chars(s), 10, false);
        assert_eq!(texts(s, &lines), vec!["the quick ", "brown fox"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let s = "abcdefghij";
        let lines = wrap_lines(&chars(s), 4, false);
        assert_eq!(texts(s, &lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_break_anywhere_ignores_spaces() {
        let s = "ab cd ef";
        let lines = wrap_lines(&chars(s), 4, true);
        assert_eq!(texts(s, &lines), vec!["ab c", "d ef"]);
    }

    #[test]
    fn wrap_zero_width_disables_wrapping() {
        let s = "a long line";
        let lines = wrap_lines(&chars(s), 0, false);
        assert_eq!(texts(s, &lines), vec!["a long line"]);
    }

    #[test]
    fn empty_text_has_one_line() {
        let lines = wrap_lines(&[], 5, false);
        assert_eq!(lines, vec![LineRange { start: 0, end: 0 }]);
    }

    #[test]
    fn locate_maps_caret_to_row_and_column() {
        let s = "ab\ncd";
        let lines = wrap_lines(&chars(s), 10, false);
        assert_eq!(locate(&lines, 0), (0, 0));
        assert_eq!(locate(&lines, 2), (0, 2));
        assert_eq!(locate(&lines, 3), (1, 0));
        assert_eq!(locate(&lines, 5), (1, 2));
    }

    #[test]
    fn locate_prefers_next_line_on_soft_wrap() {
        let s = "abcdef";
        let lines = wrap_lines(&chars(s), 3, false);
        assert_eq!(locate(&lines, 3), (1, 0));
    }
}
