//! End-to-end acceptance scenarios.

use crate::prelude::{kwargs_of, parse, path_of};

#[yare::parameterized(
    bare_command     = { "add", &["add"] },
    hyphen_keyword   = { "addr -aggro", &["addr", "-aggro"] },
    three_levels     = { "add rgb color", &["add", "rgb", "color"] },
    escaped_assign   = { r"addr -\=aggro", &["addr", "-=aggro"] },
    extra_whitespace = { "add \t rgb", &["add", "rgb"] },
)]
fn keyword_paths(input: &str, expected: &[&str]) {
    assert_eq!(path_of(input), expected);
}

#[test]
fn readme_example() {
    let input = r#"add rgb color name="my color" r=100 g=150 b=200"#;

    assert_eq!(path_of(input), ["add", "rgb", "color"]);

    let kwargs = kwargs_of(input);
    assert_eq!(kwargs[0], ("name".to_string(), "my color".to_string()));
    assert_eq!(kwargs[1].1, "100");
    assert_eq!(kwargs[2].1, "150");
    assert_eq!(kwargs[3].1, "200");
}

#[test]
fn bare_nested_command_has_empty_kwargs() {
    let node = parse("addr -aggro");
    assert!(node.kwargs().is_empty());
    assert_eq!(node.nesting_depth(), 1);
}

#[test]
fn nested_interpretation_wins() {
    // Priority tie-break: nested-command before kwargs
    assert_eq!(path_of("a b c=1"), ["a", "b"]);
    assert_eq!(kwargs_of("a b c=1"), [("c".to_string(), "1".to_string())]);
}

#[test]
fn reparsing_is_deterministic() {
    let input = "add rgb color r=100";
    assert_eq!(parse(input), parse(input));
}
