//! Source location tracking for the expression scanner
//!
//! Offsets count characters, not bytes, so every scanned character occupies
//! exactly one unit. [`SourceMap`] turns offsets back into line/column
//! positions and source text so callers can point at the offending input.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column position in source text, resolved from a character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Character offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

/// A half-open character range `[start, end)` of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// Span of `length` characters starting at `start`
    pub fn with_len(start: usize, length: usize) -> Self {
        Self::new(start, start + length)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the source text for this span, clamped to the input.
    ///
    /// The end-of-input token sits one character past the text, so the clamp
    /// keeps slicing total.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        let start = byte_offset(input, self.start);
        let end = byte_offset(input, self.end).max(start);
        &input[start..end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Byte index of the character at `char_offset`, or `input.len()` past the end
fn byte_offset(input: &str, char_offset: usize) -> usize {
    input
        .char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(input.len())
}

/// Line table over a source text, indexed by character offset
#[derive(Debug, Clone)]
pub struct SourceMap<'a> {
    source: &'a str,
    /// Character offsets of line starts
    line_starts: Vec<usize>,
    /// Byte offsets of the same line starts
    line_byte_starts: Vec<usize>,
    char_len: usize,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut line_byte_starts = vec![0];
        let mut char_len = 0;

        for (index, (byte, ch)) in source.char_indices().enumerate() {
            if ch == '\n' {
                line_starts.push(index + 1);
                line_byte_starts.push(byte + 1);
            }
            char_len = index + 1;
        }

        Self {
            source,
            line_starts,
            line_byte_starts,
            char_len,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the line and column for a character offset. Offsets past the end
    /// resolve to one column after the last character.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };

        Position {
            offset,
            line: (line + 1) as u32,
            column: (offset - self.line_starts[line] + 1) as u32,
        }
    }

    /// Get a line of text by line number (1-based)
    pub fn get_line(&self, line_num: u32) -> Option<&'a str> {
        let line_idx = (line_num as usize).checked_sub(1)?;
        let start = *self.line_byte_starts.get(line_idx)?;
        let end = self
            .line_byte_starts
            .get(line_idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());

        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Format an error message with source context and a caret underline
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let start = self.position_at(span.start);
        let mut result = format!("error: {}\n  --> {}:{}\n", message, start.line, start.column);

        if let Some(line) = self.get_line(start.line) {
            let line_num_str = start.line.to_string();
            let padding = " ".repeat(line_num_str.len());

            let end = self.position_at(span.end);
            let width = if end.line == start.line && end.column > start.column {
                (end.column - start.column) as usize
            } else {
                1
            };

            result.push_str(&format!("{} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));
            result.push_str(&format!(
                "{} | {}{}\n",
                padding,
                " ".repeat((start.column - 1) as usize),
                "^".repeat(width)
            ));
        }

        result
    }
}
