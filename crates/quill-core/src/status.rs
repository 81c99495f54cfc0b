//! Status-line metrics.
//!
//! Recomputed from the full buffer on every editor action and after
//! New/Open/Save. O(buffer length) per recompute, which is fine at
//! interactive sizes.

use std::fmt;

/// Cursor position and character count, as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Cursor line, 1-based.
    pub line: usize,
    /// Cursor column, as the widget reports it (0-based).
    pub column: usize,
    /// Characters in the buffer, excluding the trailing sentinel newline.
    pub chars: usize,
}

impl StatusSnapshot {
    /// Derives a snapshot from the widget's text and cursor.
    ///
    /// `cursor_line` and `cursor_column` are the widget's 0-based pair. The
    /// widget always appends one newline to the text it hands back; exactly
    /// that one character is excluded from the count.
    pub fn compute(text: &str, cursor_line: usize, cursor_column: usize) -> Self {
        let mut chars = text.chars().count();
        if text.ends_with('\n') {
            chars -= 1;
        }
        Self {
            line: cursor_line + 1,
            column: cursor_column,
            chars,
        }
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::compute("", 0, 0)
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: {} | Column: {} | Characters: {}",
            self.line, self.column, self.chars
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_excludes_sentinel_newline() {
        let snapshot = StatusSnapshot::compute("hello\n", 0, 5);
        assert_eq!(snapshot.chars, 5);
    }

    #[test]
    fn test_only_one_trailing_newline_is_excluded() {
        // Two real newlines plus the sentinel: only the sentinel is dropped.
        let snapshot = StatusSnapshot::compute("a\nb\n", 1, 1);
        assert_eq!(snapshot.chars, 3);
    }

    #[test]
    fn test_line_is_one_based_column_is_widget_convention() {
        let snapshot = StatusSnapshot::compute("one\ntwo\n", 1, 2);
        assert_eq!(snapshot.line, 2);
        assert_eq!(snapshot.column, 2);
    }

    #[test]
    fn test_empty_buffer() {
        let snapshot = StatusSnapshot::default();
        assert_eq!(snapshot.line, 1);
        assert_eq!(snapshot.column, 0);
        assert_eq!(snapshot.chars, 0);
    }

    #[test]
    fn test_display_format() {
        let snapshot = StatusSnapshot::compute("hello\n", 0, 5);
        assert_eq!(snapshot.to_string(), "Line: 1 | Column: 5 | Characters: 5");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let snapshot = StatusSnapshot::compute("héllo\n", 0, 5);
        assert_eq!(snapshot.chars, 5);
    }
}
