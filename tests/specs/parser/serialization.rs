//! Serialization of parsed trees, as stored or forwarded by consumers.

use quip_parser::{CommandNode, Parser, Tail};

#[test]
fn parsed_tree_round_trips_through_json() {
    let node = Parser::parse(r#"add rgb color name="my color" r=100"#).unwrap();
    let json = serde_json::to_string(&node).unwrap();
    let back: CommandNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn deserialized_tree_preserves_accessor_contracts() {
    let node = Parser::parse("a b k=v").unwrap();
    let back: CommandNode =
        serde_json::from_str(&serde_json::to_string(&node).unwrap()).unwrap();
    assert_eq!(back.keyword_path(), node.keyword_path());
    assert_eq!(back.kwargs(), node.kwargs());
}

#[test]
fn terminal_tail_serializes_as_kwargs_variant() {
    let node = Parser::parse("add r=1").unwrap();
    assert!(matches!(node.tail, Tail::Kwargs(_)));
    let json = serde_json::to_value(&node).unwrap();
    assert!(json["tail"]["Kwargs"].is_array());
}
