// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural parser errors.

use crate::error::LexError;
use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Structural parse errors.
///
/// Errors raised inside a production attempt are caught by the parser and
/// converted into a full cursor rewind plus a try of the next alternative;
/// only the failure of the last alternative at some nesting level escapes to
/// the caller as one of these variants. Use [`ParseError::context`] to
/// generate a human-readable snippet showing where the failure occurred.
///
/// # Examples
///
/// ```ignore
/// use quip_parser::{Parser, ParseError};
///
/// let result = Parser::parse("add r= g=2");
/// assert!(matches!(result, Err(ParseError::Unparsed { .. })));
///
/// let result = Parser::parse("");
/// assert!(matches!(result, Err(ParseError::Lex(_))));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lexical failure that survived every grammar alternative.
    ///
    /// Occurs when the input cannot even begin a command, e.g. empty input
    /// or a line opening with a character no keyword can start with.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// A kwarg keyword was not followed by the `=` separator.
    #[error("expected '=' after keyword '{keyword}' at column {}", span.start + 1)]
    ExpectedAssignment {
        /// The keyword awaiting its value.
        keyword: String,
        /// Location where the separator was expected.
        span: Span,
    },

    /// No production consumed the entire input.
    ///
    /// This is the top-level, user-facing failure: every grammar alternative
    /// was attempted from the same starting position and none exhausted the
    /// input. The unparsed remainder is reported verbatim.
    #[error("unparsed input at column {}: {remainder:?}", span.start + 1)]
    Unparsed {
        /// The input that no production could consume.
        remainder: String,
        /// Location of the remainder.
        span: Span,
    },
}

impl ParseError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::ExpectedAssignment { span, .. } => Some(*span),
            ParseError::Unparsed { span, .. } => Some(*span),
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// Returns a string with the relevant portion of input and a caret
    /// pointing to the error location, or `None` if the error has no span.
    ///
    /// # Example
    ///
    /// ```text
    /// add rgb !!
    /// ^^^^^^^^^^
    /// ```
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }

    /// Generate a rich diagnostic with column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}
