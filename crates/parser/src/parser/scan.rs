// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical scanning: character classes, keywords, whitespace, values.
//!
//! Scanning is fused into the parser rather than a separate tokenizing pass:
//! each scanner classifies and consumes the next run of characters directly
//! off the cursor. All repetition here is iterative; only the structural
//! parser recurses.

use super::Parser;
use crate::error::LexError;
use crate::span::Span;

/// The reserved key/value separator.
///
/// `:` is not a separator in this grammar; it is an ordinary unquoted-value
/// character.
pub(super) const ASSIGN: char = '=';

/// The escape prefix: the following character is taken literally.
pub(super) const ESCAPE: char = '\\';

/// Keyword opening characters: ASCII letters, underscore, hyphen.
pub(super) fn is_keyword_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

/// Keyword body characters: opening characters plus ASCII digits.
pub(super) fn is_keyword_body(c: char) -> bool {
    is_keyword_start(c) || c.is_ascii_digit()
}

/// Unquoted value characters: ASCII alphanumerics plus punctuation other
/// than the quote, assignment, and escape characters.
pub(super) fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (c.is_ascii_punctuation() && !matches!(c, '"' | '\'' | ASSIGN | ESCAPE))
}

/// Whitespace between tokens: space, tab, carriage return.
pub(super) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

impl Parser {
    /// Greedily consume whitespace. Zero-or-more, never fails.
    pub(super) fn skip_whitespace(&mut self) {
        while self.cursor.peek().is_some_and(is_whitespace) {
            self.cursor.consume();
        }
    }

    /// Consume the escape prefix and return the following character.
    fn scan_escape(&mut self) -> Result<char, LexError> {
        self.cursor.consume(); // the backslash
        self.cursor.consume().ok_or_else(|| LexError::UnexpectedEof {
            expected: "a character to escape".to_string(),
        })
    }

    /// Scan a keyword: a command/subcommand name or a kwarg key.
    ///
    /// The first character must be a keyword opener; the body extends
    /// greedily over keyword characters. An `\` escape inside the body takes
    /// the next character into the keyword literally, so reserved characters
    /// can appear in command names (`-\=aggro` scans as `-=aggro`).
    ///
    /// The result is always non-empty.
    pub(super) fn scan_keyword(&mut self) -> Result<String, LexError> {
        let mut keyword = String::new();

        match self.cursor.peek() {
            Some(c) if is_keyword_start(c) => {
                self.cursor.consume();
                keyword.push(c);
            }
            Some(c) => {
                return Err(LexError::InvalidKeywordStart {
                    found: c,
                    span: Span::new(self.cursor.pos(), self.cursor.pos() + 1),
                });
            }
            None => {
                return Err(LexError::UnexpectedEof {
                    expected: "a keyword".to_string(),
                });
            }
        }

        loop {
            match self.cursor.peek() {
                Some(c) if is_keyword_body(c) => {
                    self.cursor.consume();
                    keyword.push(c);
                }
                Some(ESCAPE) => keyword.push(self.scan_escape()?),
                _ => break,
            }
        }

        Ok(keyword)
    }

    /// Scan a value: quoted (verbatim with escapes) or unquoted (greedy).
    ///
    /// Dispatches on the next character; anything that cannot open a value,
    /// including immediate end of input, is a [`LexError`]. In particular a
    /// kwarg with nothing after its `=` is an error, never an empty string.
    pub(super) fn scan_value(&mut self) -> Result<String, LexError> {
        match self.cursor.peek() {
            Some(q @ ('"' | '\'')) => self.scan_quoted(q),
            Some(c) if is_value_char(c) || c == ESCAPE => self.scan_unquoted(),
            Some(c) => Err(LexError::UnexpectedChar {
                found: c,
                span: Span::new(self.cursor.pos(), self.cursor.pos() + 1),
            }),
            None => Err(LexError::UnexpectedEof {
                expected: "a value".to_string(),
            }),
        }
    }

    /// Scan a quoted value up to the matching closing quote.
    ///
    /// Characters are taken verbatim, whitespace and `=` included. `\`
    /// escapes any character, including the quote and the backslash itself.
    fn scan_quoted(&mut self, quote: char) -> Result<String, LexError> {
        let open = self.cursor.pos();
        self.cursor.consume(); // opening quote

        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                Some(c) if c == quote => {
                    self.cursor.consume();
                    return Ok(value);
                }
                Some(ESCAPE) => value.push(self.scan_escape()?),
                Some(c) => {
                    self.cursor.consume();
                    value.push(c);
                }
                None => {
                    return Err(LexError::UnterminatedQuote {
                        quote,
                        span: Span::new(open, open + 1),
                    });
                }
            }
        }
    }

    /// Scan an unquoted value greedily over value characters.
    ///
    /// `\` escapes the next character into the value. Stops at whitespace,
    /// `=`, a quote, or end of input. The caller guarantees the first
    /// character opens a value, so the result is non-empty.
    fn scan_unquoted(&mut self) -> Result<String, LexError> {
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                Some(c) if is_value_char(c) => {
                    self.cursor.consume();
                    value.push(c);
                }
                Some(ESCAPE) => value.push(self.scan_escape()?),
                _ => break,
            }
        }
        Ok(value)
    }
}
