// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character-level lexical errors.

use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Lexical errors raised while scanning keywords and values.
///
/// These are always attributable to malformed user input. During parsing
/// they are caught at production boundaries and converted into backtracking;
/// one only reaches the caller when no grammar alternative applies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start a value.
    #[error("unexpected character {found:?} at column {}", span.start + 1)]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Location of the character.
        span: Span,
    },

    /// A keyword must open with an ASCII letter, underscore, or hyphen.
    #[error("keyword cannot start with {found:?} at column {}", span.start + 1)]
    InvalidKeywordStart {
        /// The offending character.
        found: char,
        /// Location of the character.
        span: Span,
    },

    /// Input ended while more characters were required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// A quoted value was opened but never closed.
    #[error("unterminated {quote} quote opened at column {}", span.start + 1)]
    UnterminatedQuote {
        /// The quote character that was left open.
        quote: char,
        /// Location of the opening quote.
        span: Span,
    },
}

impl LexError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedChar { span, .. } => Some(*span),
            LexError::InvalidKeywordStart { span, .. } => Some(*span),
            LexError::UnexpectedEof { .. } => None,
            LexError::UnterminatedQuote { span, .. } => Some(*span),
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// Returns `Some(String)` with a caret pointing at the error location,
    /// `None` if the error has no span.
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }

    /// Generate a rich diagnostic with column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}
