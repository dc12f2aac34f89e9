// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests.

use crate::ast::CommandNode;
use crate::parser::Parser;

/// Parse or panic with the error message.
pub fn parse(input: &str) -> CommandNode {
    match Parser::parse(input) {
        Ok(node) => node,
        Err(e) => panic!("parse of {input:?} failed: {e}"),
    }
}

/// The keyword path of a parsed input, as owned strings.
pub fn path(input: &str) -> Vec<String> {
    parse(input)
        .keyword_path()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The terminal kwargs of a parsed input, as (key, value) pairs.
pub fn kwargs(input: &str) -> Vec<(String, String)> {
    parse(input)
        .kwargs()
        .iter()
        .map(|kw| (kw.key.clone(), kw.value.clone()))
        .collect()
}

/// Build the expected (key, value) pair vector tersely.
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
