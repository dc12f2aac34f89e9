// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backtracking recursive-descent parser for the command grammar.

mod scan;

use tracing::trace;

use crate::ast::{CommandNode, Kwarg, Tail};
use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::span::Span;

/// Recursive-descent parser over a character cursor.
///
/// At every nesting level three productions are attempted **in fixed
/// priority order** over the same starting checkpoint, with a full cursor
/// rewind between attempts:
///
/// 1. Nested subcommand: `keyword WS command`
/// 2. Kwargs: `keyword WS (kwarg WS?)*`
/// 3. Bare: `keyword`
///
/// The first two productions are prefixes of each other at the lexical
/// level, so no amount of lookahead separates them; an alternative wins only
/// if it consumes the entire remaining input. The priority order is
/// load-bearing compatibility behavior: an input matching more than one
/// production resolves to the earliest.
///
/// Recursion occurs only in the nested-subcommand production, so recursion
/// depth equals the number of subcommand levels in the input, never its
/// length. All character-level repetition is iterative.
///
/// # Examples
///
/// ```ignore
/// use quip_parser::Parser;
///
/// let node = Parser::parse(r#"add rgb color name="my color" r=100"#)?;
/// assert_eq!(node.keyword_path(), vec!["add", "rgb", "color"]);
/// assert_eq!(node.kwargs()[0].value, "my color");
/// # Ok::<(), quip_parser::ParseError>(())
/// ```
pub struct Parser {
    /// The character stream. Owned per parse call; never shared.
    cursor: Cursor,
}

impl Parser {
    /// Parse a single command line into a [`CommandNode`].
    ///
    /// All-or-nothing: the entire input must be consumed by some chain of
    /// productions, otherwise a [`ParseError`] names the unparsed remainder.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use quip_parser::{Parser, Tail};
    ///
    /// // Bare nested command with an empty terminal kwargs list
    /// let node = Parser::parse("addr -aggro")?;
    /// assert_eq!(node.keyword_path(), vec!["addr", "-aggro"]);
    /// assert!(node.kwargs().is_empty());
    ///
    /// // Trailing input that fits no production is an error
    /// assert!(Parser::parse("add rgb !!").is_err());
    /// # Ok::<(), quip_parser::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<CommandNode, ParseError> {
        trace!(len = input.len(), "parsing command line");
        let mut parser = Parser {
            cursor: Cursor::new(input),
        };
        parser.parse_command()
    }

    /// Parse one command level, trying each production with full rewind.
    fn parse_command(&mut self) -> Result<CommandNode, ParseError> {
        let checkpoint = self.cursor.save();

        match self.nested_command() {
            Ok(node) => return Ok(node),
            Err(_) => {
                trace!(pos = self.cursor.pos(), "nested production failed, rewinding");
                self.cursor.restore(checkpoint);
            }
        }

        match self.command_with_kwargs() {
            Ok(node) => return Ok(node),
            Err(_) => {
                trace!(pos = self.cursor.pos(), "kwargs production failed, rewinding");
                self.cursor.restore(checkpoint);
            }
        }

        let bare_err = match self.bare_command() {
            Ok(node) => return Ok(node),
            Err(e) => e,
        };
        self.cursor.restore(checkpoint);

        // Nothing at this position begins a command at all (e.g. empty
        // input): the keyword failure is more precise than an empty
        // remainder.
        if self.cursor.is_at_end() {
            return Err(bare_err);
        }

        let remainder = self.cursor.remaining();
        let len = remainder.chars().count();
        Err(ParseError::Unparsed {
            remainder,
            span: Span::new(self.cursor.pos(), self.cursor.pos() + len),
        })
    }

    /// Production 1: `keyword WS command`, exhausting the input.
    fn nested_command(&mut self) -> Result<CommandNode, ParseError> {
        let name = self.scan_keyword()?;
        self.skip_whitespace();
        let nested = self.parse_command()?;
        self.expect_exhausted()?;
        Ok(CommandNode {
            name,
            tail: Tail::Command(Box::new(nested)),
        })
    }

    /// Production 2: `keyword WS (kwarg WS?)*`, exhausting the input.
    fn command_with_kwargs(&mut self) -> Result<CommandNode, ParseError> {
        let name = self.scan_keyword()?;
        self.skip_whitespace();
        let kwargs = self.parse_kwargs()?;
        self.expect_exhausted()?;
        Ok(CommandNode {
            name,
            tail: Tail::Kwargs(kwargs),
        })
    }

    /// Production 3: a keyword alone, exhausting the input.
    fn bare_command(&mut self) -> Result<CommandNode, ParseError> {
        let name = self.scan_keyword()?;
        self.expect_exhausted()?;
        Ok(CommandNode {
            name,
            tail: Tail::Kwargs(Vec::new()),
        })
    }

    /// Zero or more `keyword WS? '=' WS? value` pairs.
    ///
    /// Stops cleanly when the next character does not begin a keyword; a
    /// malformed pair aborts the whole kwargs production, which triggers
    /// backtracking at the enclosing level.
    fn parse_kwargs(&mut self) -> Result<Vec<Kwarg>, ParseError> {
        let mut kwargs = Vec::new();
        loop {
            self.skip_whitespace();
            match self.cursor.peek() {
                Some(c) if scan::is_keyword_start(c) => kwargs.push(self.parse_kwarg()?),
                _ => break,
            }
        }
        Ok(kwargs)
    }

    /// One `keyword WS? '=' WS? value` pair.
    fn parse_kwarg(&mut self) -> Result<Kwarg, ParseError> {
        let key = self.scan_keyword()?;
        self.skip_whitespace();
        self.expect_assignment(&key)?;
        self.skip_whitespace();
        let value = self.scan_value()?;
        Ok(Kwarg { key, value })
    }

    /// Consume the `=` separating a kwarg key from its value.
    fn expect_assignment(&mut self, keyword: &str) -> Result<(), ParseError> {
        match self.cursor.peek() {
            Some(scan::ASSIGN) => {
                self.cursor.consume();
                Ok(())
            }
            _ => Err(ParseError::ExpectedAssignment {
                keyword: keyword.to_string(),
                span: Span::new(self.cursor.pos(), self.cursor.pos() + 1),
            }),
        }
    }

    /// Fail unless the cursor consumed the entire input.
    ///
    /// The complete-consumption test is the sole disambiguator between
    /// grammar alternatives.
    fn expect_exhausted(&mut self) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let remainder = self.cursor.remaining();
        let len = remainder.chars().count();
        Err(ParseError::Unparsed {
            remainder,
            span: Span::new(self.cursor.pos(), self.cursor.pos() + len),
        })
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
