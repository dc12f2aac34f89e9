// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural production tests: bare commands, nesting, priority order.

use super::helpers::{kwargs, pairs, parse, path};
use crate::ast::Tail;

// =============================================================================
// Bare Commands
// =============================================================================

#[test]
fn single_keyword() {
    let node = parse("add");
    assert_eq!(node.name, "add");
    assert_eq!(path("add"), vec!["add"]);
    assert!(kwargs("add").is_empty());
}

#[test]
fn keyword_with_digits_and_separators() {
    assert_eq!(path("add-rgb_2"), vec!["add-rgb_2"]);
}

#[test]
fn hyphen_prefixed_keyword() {
    assert_eq!(path("-aggro"), vec!["-aggro"]);
}

// =============================================================================
// Nested Subcommand Chains
// =============================================================================

#[test]
fn two_level_chain() {
    let node = parse("addr -aggro");
    assert_eq!(node.keyword_path(), vec!["addr", "-aggro"]);
    assert!(node.kwargs().is_empty());

    // The terminal level carries the (empty) kwargs list
    match &node.tail {
        Tail::Command(next) => assert!(matches!(next.tail, Tail::Kwargs(ref k) if k.is_empty())),
        Tail::Kwargs(_) => panic!("expected a nested command tail"),
    }
}

#[test]
fn three_level_chain_with_kwargs() {
    let node = parse("add rgb color r=100 g=150 b=200");
    assert_eq!(node.keyword_path(), vec!["add", "rgb", "color"]);
    assert_eq!(
        kwargs("add rgb color r=100 g=150 b=200"),
        pairs(&[("r", "100"), ("g", "150"), ("b", "200")])
    );
}

#[test]
fn deep_chain() {
    assert_eq!(path("a b c d e"), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn escaped_separator_in_command_name() {
    // The backslash escapes `=` into the name literally
    let node = parse(r"addr -\=aggro");
    assert_eq!(node.keyword_path(), vec!["addr", "-=aggro"]);
    assert!(node.kwargs().is_empty());
}

// =============================================================================
// Production Priority
// =============================================================================

#[test]
fn nested_interpretation_wins_over_kwargs() {
    // `a b c=1` resolves as command a -> subcommand b with kwargs {c=1},
    // never as anything leaving `c=1` unparsed.
    let node = parse("a b c=1");
    assert_eq!(node.keyword_path(), vec!["a", "b"]);
    assert_eq!(kwargs("a b c=1"), pairs(&[("c", "1")]));
}

#[test]
fn kwargs_stay_at_the_deepest_level() {
    let node = parse("outer inner k=v");
    match &node.tail {
        Tail::Command(next) => {
            assert_eq!(next.name, "inner");
            assert!(matches!(next.tail, Tail::Kwargs(ref k) if k.len() == 1));
        }
        Tail::Kwargs(_) => panic!("expected a nested command tail"),
    }
}

// =============================================================================
// Whitespace Insensitivity
// =============================================================================

#[test]
fn extra_spaces_between_tokens() {
    assert_eq!(parse("add   rgb  r=1"), parse("add rgb r=1"));
}

#[test]
fn tabs_and_carriage_returns_between_tokens() {
    assert_eq!(parse("add\trgb\rr=1"), parse("add rgb r=1"));
}

#[test]
fn spaces_around_assignment() {
    assert_eq!(parse("add r = 1"), parse("add r=1"));
    assert_eq!(parse("add r =1"), parse("add r= 1"));
}

// =============================================================================
// Accessor Reflection
// =============================================================================

#[test]
fn path_and_kwargs_reflect_token_order() {
    let input = "alpha beta k1=v1 k2=v2 k1=v3";
    assert_eq!(path(input), vec!["alpha", "beta"]);
    assert_eq!(
        kwargs(input),
        pairs(&[("k1", "v1"), ("k2", "v2"), ("k1", "v3")])
    );
}
