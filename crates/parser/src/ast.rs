// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command tree produced by parsing.

use serde::{Deserialize, Serialize};

use crate::parse_error::ParseError;

/// A single keyword/value pair.
///
/// Keys are not required to be unique: duplicates are preserved in encounter
/// order, and any last-wins (or first-wins) policy is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kwarg {
    /// The keyword left of the `=` separator.
    pub key: String,
    /// The value right of the `=` separator, with quotes and escapes resolved.
    pub value: String,
}

impl Kwarg {
    /// Create a kwarg pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What follows a command name.
///
/// Either exactly one deeper subcommand level, or the terminal flat list of
/// keyword arguments (possibly empty). Every chain of nested command nodes
/// terminates in exactly one `Kwargs` tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tail {
    /// A nested subcommand level.
    Command(Box<CommandNode>),
    /// The terminal keyword-argument list.
    Kwargs(Vec<Kwarg>),
}

/// A parsed command: a name plus a [`Tail`].
///
/// Immutable value constructed once per parse call; it holds no reference
/// back to the parser or its cursor.
///
/// # Examples
///
/// ```ignore
/// use quip_parser::CommandNode;
///
/// let node = CommandNode::parse("add rgb color r=100")?;
/// assert_eq!(node.keyword_path(), vec!["add", "rgb", "color"]);
/// assert_eq!(node.kwargs()[0].key, "r");
/// # Ok::<(), quip_parser::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandNode {
    /// The command or subcommand name. Never empty.
    pub name: String,
    /// The rest of the command at this level.
    pub tail: Tail,
}

impl CommandNode {
    /// Parse a command line.
    ///
    /// This is a convenience wrapper around [`Parser::parse`].
    ///
    /// [`Parser::parse`]: crate::parser::Parser::parse
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parser::Parser::parse(input)
    }

    /// Names along the subcommand chain, outermost first.
    ///
    /// Walks the tail while it is a nested command, collecting each level's
    /// name, and stops at the terminal kwargs list. Pure and total: any
    /// parsed tree yields a non-empty path.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use quip_parser::CommandNode;
    ///
    /// let node = CommandNode::parse("addr -aggro")?;
    /// assert_eq!(node.keyword_path(), vec!["addr", "-aggro"]);
    /// # Ok::<(), quip_parser::ParseError>(())
    /// ```
    pub fn keyword_path(&self) -> Vec<&str> {
        let mut path = vec![self.name.as_str()];
        let mut node = self;
        while let Tail::Command(next) = &node.tail {
            path.push(next.name.as_str());
            node = next;
        }
        path
    }

    /// The terminal kwargs list at the end of the subcommand chain.
    ///
    /// Empty for bare commands. Pure and total over any parsed tree.
    pub fn kwargs(&self) -> &[Kwarg] {
        let mut node = self;
        loop {
            match &node.tail {
                Tail::Command(next) => node = next,
                Tail::Kwargs(kwargs) => return kwargs,
            }
        }
    }

    /// Number of nested subcommand levels below this node.
    ///
    /// Returns 0 for a terminal node. In practice command chains are 1-3
    /// levels deep.
    pub fn nesting_depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let Tail::Command(next) = &node.tail {
            depth += 1;
            node = next;
        }
        depth
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
