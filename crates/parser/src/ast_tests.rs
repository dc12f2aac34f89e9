// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn leaf(name: &str, kwargs: Vec<Kwarg>) -> CommandNode {
    CommandNode {
        name: name.to_string(),
        tail: Tail::Kwargs(kwargs),
    }
}

fn chain(name: &str, next: CommandNode) -> CommandNode {
    CommandNode {
        name: name.to_string(),
        tail: Tail::Command(Box::new(next)),
    }
}

#[test]
fn keyword_path_walks_the_chain() {
    let node = chain("add", chain("rgb", leaf("color", vec![])));
    assert_eq!(node.keyword_path(), vec!["add", "rgb", "color"]);
}

#[test]
fn keyword_path_of_terminal_node() {
    let node = leaf("add", vec![Kwarg::new("r", "100")]);
    assert_eq!(node.keyword_path(), vec!["add"]);
}

#[test]
fn kwargs_returns_terminal_list() {
    let kwargs = vec![Kwarg::new("r", "100"), Kwarg::new("g", "150")];
    let node = chain("add", leaf("rgb", kwargs.clone()));
    assert_eq!(node.kwargs(), kwargs.as_slice());
}

#[test]
fn kwargs_empty_for_bare_chain() {
    let node = chain("addr", leaf("-aggro", vec![]));
    assert!(node.kwargs().is_empty());
}

#[test]
fn accessors_are_idempotent() {
    let node = chain("a", leaf("b", vec![Kwarg::new("k", "v")]));
    assert_eq!(node.keyword_path(), node.keyword_path());
    assert_eq!(node.kwargs(), node.kwargs());
}

#[test]
fn duplicate_keys_are_preserved_in_order() {
    let kwargs = vec![
        Kwarg::new("k", "1"),
        Kwarg::new("k", "2"),
        Kwarg::new("k", "1"),
    ];
    let node = leaf("cmd", kwargs.clone());
    assert_eq!(node.kwargs(), kwargs.as_slice());
}

#[test]
fn nesting_depth_counts_levels() {
    assert_eq!(leaf("a", vec![]).nesting_depth(), 0);
    assert_eq!(chain("a", leaf("b", vec![])).nesting_depth(), 1);
    assert_eq!(
        chain("a", chain("b", leaf("c", vec![]))).nesting_depth(),
        2
    );
}

#[test]
fn parse_convenience_matches_parser() {
    let via_node = CommandNode::parse("add r=1").unwrap();
    let via_parser = crate::parser::Parser::parse("add r=1").unwrap();
    assert_eq!(via_node, via_parser);
}

#[test]
fn serde_round_trip() {
    let node = chain("add", leaf("rgb", vec![Kwarg::new("r", "100")]));
    let json = serde_json::to_string(&node).unwrap();
    let back: CommandNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn serialized_shape_is_stable() {
    let node = leaf("add", vec![Kwarg::new("r", "100")]);
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "add",
            "tail": { "Kwargs": [ { "key": "r", "value": "100" } ] }
        })
    );
}
