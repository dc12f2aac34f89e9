//! Shared helpers for spec tests.

use quip_parser::{CommandNode, Parser};

/// Parse or panic with the error message.
pub fn parse(input: &str) -> CommandNode {
    match Parser::parse(input) {
        Ok(node) => node,
        Err(e) => panic!("parse of {input:?} failed: {e}"),
    }
}

/// Keyword path as owned strings.
pub fn path_of(input: &str) -> Vec<String> {
    parse(input)
        .keyword_path()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Terminal kwargs as (key, value) pairs.
pub fn kwargs_of(input: &str) -> Vec<(String, String)> {
    parse(input)
        .kwargs()
        .iter()
        .map(|kw| (kw.key.clone(), kw.value.clone()))
        .collect()
}
