// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rejection tests: failed productions, unparsed remainders, diagnostics.

use crate::error::LexError;
use crate::parse_error::ParseError;
use crate::parser::Parser;

// =============================================================================
// Empty and Degenerate Input
// =============================================================================

#[test]
fn empty_input_is_rejected() {
    let err = Parser::parse("").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Lex(LexError::UnexpectedEof { .. })
    ));
}

#[test]
fn whitespace_only_input_is_rejected() {
    assert!(Parser::parse("   ").is_err());
}

#[test]
fn input_starting_with_invalid_keyword_character() {
    let err = Parser::parse("=add").unwrap_err();
    assert!(matches!(err, ParseError::Unparsed { .. }));
}

// =============================================================================
// Unparsed Remainders
// =============================================================================

#[test]
fn trailing_garbage_names_the_remainder() {
    let err = Parser::parse("add rgb !!").unwrap_err();
    match err {
        ParseError::Unparsed { remainder, .. } => assert_eq!(remainder, "add rgb !!"),
        other => panic!("expected Unparsed, got {other:?}"),
    }
}

#[test]
fn missing_value_after_assignment_is_rejected() {
    // Pinned empty-value policy: `add r=` is an error, not an empty string
    let err = Parser::parse("add r=").unwrap_err();
    assert!(matches!(err, ParseError::Unparsed { .. }));
}

#[test]
fn lone_assignment_tail_is_rejected() {
    assert!(Parser::parse("r=").is_err());
    assert!(Parser::parse("=").is_err());
}

#[test]
fn unterminated_double_quote_is_rejected() {
    assert!(Parser::parse(r#"add name="my color"#).is_err());
}

#[test]
fn unterminated_single_quote_is_rejected() {
    assert!(Parser::parse("add name='oops").is_err());
}

#[test]
fn dangling_escape_is_rejected() {
    assert!(Parser::parse(r"add k=\").is_err());
}

#[test]
fn colon_never_acts_as_separator() {
    // The historical `:` grammar is not supported: `name:100` cannot extend
    // a keyword and cannot begin a kwarg, so the line is rejected.
    assert!(Parser::parse("add rgb color name:100").is_err());
}

// =============================================================================
// Backtracking Discipline
// =============================================================================

#[test]
fn failed_alternative_leaves_no_partial_result() {
    // The kwargs production fails mid-pair here; the error must describe
    // the level's full remainder, not a half-consumed position.
    let err = Parser::parse("add r=1 g").unwrap_err();
    match err {
        ParseError::Unparsed { remainder, span } => {
            assert_eq!(remainder, "add r=1 g");
            assert_eq!(span.start, 0);
        }
        other => panic!("expected Unparsed, got {other:?}"),
    }
}

// =============================================================================
// Error Reporting
// =============================================================================

#[test]
fn error_context_shows_the_remainder() {
    let input = "add rgb !!";
    let err = Parser::parse(input).unwrap_err();
    let ctx = err.context(input, 30).unwrap();
    assert!(ctx.contains("add rgb !!"));
    assert!(ctx.contains('^'));
}

#[test]
fn error_diagnostic_reports_column() {
    let input = "add rgb !!";
    let err = Parser::parse(input).unwrap_err();
    let diag = err.diagnostic(input).unwrap();
    assert!(diag.contains("error:"));
    assert!(diag.contains("column 1"));
}

#[test]
fn eof_errors_have_no_span() {
    let err = Parser::parse("").unwrap_err();
    assert!(err.span().is_none());
    assert!(err.context("", 10).is_none());
}
