// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Parser for a single-line, shell-like command mini-language.
//!
//! A line such as `add rgb color name="my color" r=100 g=150 b=200` is
//! decomposed into a [`CommandNode`] tree: a command name followed by either
//! a nested subcommand or a terminal flat list of keyword arguments.
//!
//! # Quick Start
//!
//! ```ignore
//! use quip_parser::Parser;
//!
//! let node = Parser::parse("add rgb color r=100 g=150 b=200")?;
//! assert_eq!(node.keyword_path(), vec!["add", "rgb", "color"]);
//! assert_eq!(node.kwargs().len(), 3);
//! # Ok::<(), quip_parser::ParseError>(())
//! ```
//!
//! # Grammar
//!
//! ```text
//! command      := keyword WS? (command | kwargs | ε)
//! kwargs       := (kwarg WS?)*
//! kwarg        := keyword WS? '=' WS? value
//! keyword      := keyword_start keyword_body*
//! value        := unquoted_value | quoted_value
//! quoted_value := ('"' | "'") ( '\' any | not-matching-quote )* matching_quote
//! ```
//!
//! The grammar is ambiguous at the lexical level: a nested subcommand chain
//! and a kwargs list both open with "keyword, whitespace, more". The parser
//! resolves this with a fixed priority order (nested command, then kwargs,
//! then bare keyword) where an alternative wins only if it consumes the
//! entire remaining input. See [`Parser`] for details.
//!
//! # Tree Structure
//!
//! ```text
//! CommandNode
//! ├── name: String
//! └── tail: Tail
//!     ├── Command(CommandNode)   deeper subcommand level
//!     └── Kwargs(Vec<Kwarg>)     terminal keyword arguments
//! ```
//!
//! # Consuming the tree
//!
//! A dispatcher resolves a handler by walking [`CommandNode::keyword_path`]
//! through its registry, then hands the handler the flat
//! [`CommandNode::kwargs`] list. Both accessors are pure and total over any
//! parsed tree.

mod ast;
mod cursor;
mod error;
mod parse_error;
mod parser;
pub mod span;

// AST types
pub use ast::{CommandNode, Kwarg, Tail};

// Cursor
pub use cursor::{Checkpoint, Cursor};

// Errors
pub use error::LexError;
pub use parse_error::ParseError;

// Parser
pub use parser::Parser;

// Spans
pub use span::{context_snippet, diagnostic_context, Span};
