// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command-line input.

use serde::{Deserialize, Serialize};

/// A span representing a range of characters in the input line.
///
/// Spans use character offsets, matching the parser's character cursor.
/// The input is a single line, so there is no line tracking.
///
/// # Examples
///
/// ```ignore
/// use quip_parser::Span;
///
/// let input = "add rgb";
/// let span = Span::new(4, 7);
/// assert_eq!(span.slice(input), "rgb");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end character positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains a character position.
    ///
    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text from the input.
    ///
    /// Returns an empty string if the span is out of bounds.
    pub fn slice(&self, input: &str) -> String {
        input.chars().skip(self.start).take(self.len()).collect()
    }
}

/// Generate a context snippet showing the error location in the input.
///
/// Returns a formatted string with the relevant portion of input and carets
/// pointing to the span location.
///
/// # Arguments
///
/// * `input` - The original input string.
/// * `span` - The span to highlight.
/// * `context_chars` - Number of characters of context to show around the span.
///
/// # Example
///
/// ```text
/// add r= g=2
///      ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let anchor = span.start.min(chars.len());

    let start = anchor.saturating_sub(context_chars);
    let end = anchor
        .saturating_add(context_chars + 1)
        .max(span.end)
        .min(chars.len());

    let snippet: String = chars[start..end].iter().collect();
    let caret_pos = anchor - start;
    let caret_len = span.len().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Generate a rich diagnostic message with column info.
///
/// Produces output in a format similar to rustc/clippy errors:
///
/// ```text
/// error: unterminated " quote opened at column 5
///   --> column 5
///    |
///    | add "rgb
///    |     ^
/// ```
///
/// # Arguments
///
/// * `input` - The original input line.
/// * `span` - The span to highlight.
/// * `message` - The error message to display.
pub fn diagnostic_context(input: &str, span: Span, message: &str) -> String {
    let caret_len = span.len().max(1);

    format!(
        "error: {}\n  --> column {}\n   |\n   | {}\n   | {}{}",
        message,
        span.start + 1, // 1-indexed for user display
        input,
        " ".repeat(span.start),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
