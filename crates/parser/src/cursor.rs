// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-character lookahead stream over the raw input text.

/// A saved cursor position, used for backtracking.
///
/// Restoring a checkpoint rewinds the cursor by value; the character buffer
/// itself is never copied, so a rewind is O(1) regardless of input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A single-character lookahead stream over the input line.
///
/// The cursor is the leaf component of the parser: everything else is built
/// on [`Cursor::peek`] and [`Cursor::consume`]. Inspecting and advancing are
/// one step in `consume`, so uninspected input can never be consumed.
///
/// Each parse call owns a private cursor; the type holds no shared state.
///
/// # Examples
///
/// ```ignore
/// use quip_parser::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.consume(), Some('a'));
///
/// let checkpoint = cursor.save();
/// assert_eq!(cursor.consume(), Some('b'));
/// cursor.restore(checkpoint);
/// assert_eq!(cursor.peek(), Some('b'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    /// Index of the next unconsumed character; `== chars.len()` at end.
    pos: usize,
}

impl Cursor {
    /// Create a cursor positioned before the first character of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Look at the next character without advancing.
    ///
    /// Idempotent: repeated calls return the same character until a
    /// `consume` advances past it. Returns `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume the next character, advancing the cursor by one.
    ///
    /// Returns `None` at end of input; consuming past the end is not
    /// representable.
    #[inline]
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Character offset of the next unconsumed character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Check if the entire input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// All unconsumed characters, from the current position to the end,
    /// without consuming them.
    ///
    /// Used for end-of-input validation and error reporting.
    pub fn remaining(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    /// Save the current position for later backtracking.
    #[inline]
    pub fn save(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Rewind to a previously saved position.
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
