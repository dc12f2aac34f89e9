//! The dispatcher contract: resolving a handler by keyword path and handing
//! it the flat kwargs list. The registry here is deliberately minimal; the
//! parser only guarantees the two accessor contracts.

use std::collections::HashMap;

use quip_parser::{Kwarg, Parser};

enum Entry {
    Handler(&'static str),
    Subcommands(HashMap<&'static str, Entry>),
}

fn registry() -> HashMap<&'static str, Entry> {
    let mut rgb = HashMap::new();
    rgb.insert("color", Entry::Handler("add_rgb_color"));

    let mut add = HashMap::new();
    add.insert("rgb", Entry::Subcommands(rgb));

    let mut root = HashMap::new();
    root.insert("add", Entry::Subcommands(add));
    root.insert("remove", Entry::Handler("remove"));
    root
}

fn resolve<'r>(registry: &'r HashMap<&'static str, Entry>, path: &[&str]) -> Option<&'r str> {
    let (first, rest) = path.split_first()?;
    match registry.get(*first)? {
        Entry::Handler(name) if rest.is_empty() => Some(name),
        Entry::Subcommands(inner) => resolve(inner, rest),
        Entry::Handler(_) => None,
    }
}

#[test]
fn resolves_nested_handler_and_passes_kwargs() {
    let node = Parser::parse("add rgb color r=100 g=150").unwrap();

    let registry = registry();
    let handler = resolve(&registry, &node.keyword_path()).unwrap();
    assert_eq!(handler, "add_rgb_color");

    let kwargs: &[Kwarg] = node.kwargs();
    assert_eq!(kwargs[0], Kwarg::new("r", "100"));
    assert_eq!(kwargs[1], Kwarg::new("g", "150"));
}

#[test]
fn resolves_top_level_handler() {
    let node = Parser::parse("remove name=origin").unwrap();
    assert_eq!(resolve(&registry(), &node.keyword_path()), Some("remove"));
}

#[test]
fn unknown_path_resolves_to_nothing() {
    let node = Parser::parse("add rgb").unwrap();
    assert_eq!(resolve(&registry(), &node.keyword_path()), None);
}
