//! Inputs the grammar must reject, and the shape of the reported errors.

use quip_parser::{ParseError, Parser};

#[yare::parameterized(
    empty               = { "" },
    whitespace_only     = { "  \t " },
    leading_assignment  = { "=add" },
    missing_value       = { "add r=" },
    dangling_kwarg_key  = { "add r=1 g" },
    unterminated_double = { r#"add name="oops"# },
    unterminated_single = { "add name='oops" },
    dangling_escape     = { r"add k=\" },
    colon_separator     = { "add rgb color name:100" },
)]
fn rejected(input: &str) {
    assert!(Parser::parse(input).is_err(), "accepted {input:?}");
}

#[test]
fn unparsed_error_names_the_remainder() {
    let input = "add rgb !!";
    match Parser::parse(input).unwrap_err() {
        ParseError::Unparsed { remainder, .. } => assert_eq!(remainder, input),
        other => panic!("expected Unparsed, got {other:?}"),
    }
}

#[test]
fn error_display_is_actionable() {
    let err = Parser::parse("add rgb !!").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unparsed input"));
    assert!(message.contains("add rgb !!"));
}

#[test]
fn diagnostic_points_at_the_failure() {
    let input = "add rgb !!";
    let err = Parser::parse(input).unwrap_err();
    let diag = err.diagnostic(input).unwrap();
    assert!(diag.contains("--> column 1"));
    assert!(diag.contains(input));
}
