// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted-value scanning tests: quotes, escapes, verbatim content.

use super::helpers::{kwargs, pairs, path};

#[test]
fn double_quoted_value_with_spaces() {
    assert_eq!(
        kwargs(r#"add name="my color" r=100"#),
        pairs(&[("name", "my color"), ("r", "100")])
    );
    assert_eq!(path(r#"add rgb color name="my color" r=100"#), vec!["add", "rgb", "color"]);
}

#[test]
fn single_quoted_value_with_spaces() {
    assert_eq!(
        kwargs("add name='my color'"),
        pairs(&[("name", "my color")])
    );
}

#[test]
fn quotes_take_assignment_verbatim() {
    assert_eq!(kwargs(r#"set k="a=b c=d""#), pairs(&[("k", "a=b c=d")]));
}

#[test]
fn double_quotes_inside_single_quotes() {
    assert_eq!(kwargs(r#"set k='say "hi"'"#), pairs(&[("k", r#"say "hi""#)]));
}

#[test]
fn single_quote_inside_double_quotes() {
    assert_eq!(kwargs(r#"set k="it's""#), pairs(&[("k", "it's")]));
}

#[test]
fn escaped_quote_inside_quotes() {
    assert_eq!(kwargs(r#"set k="say \"hi\"""#), pairs(&[("k", r#"say "hi""#)]));
}

#[test]
fn escaped_backslash_inside_quotes() {
    assert_eq!(kwargs(r#"set k="a\\b""#), pairs(&[("k", r"a\b")]));
}

#[test]
fn quoting_round_trip() {
    // Literal space, literal quote (escaped), literal backslash (escaped)
    assert_eq!(
        kwargs(r#"set k="a \" \\ b""#),
        pairs(&[("k", r#"a " \ b"#)])
    );
}

#[test]
fn empty_quoted_value() {
    assert_eq!(kwargs(r#"set k="""#), pairs(&[("k", "")]));
    assert_eq!(kwargs("set k=''"), pairs(&[("k", "")]));
}

#[test]
fn whitespace_inside_quotes_is_not_a_token_boundary() {
    assert_eq!(
        kwargs("set a='1  2' b=3"),
        pairs(&[("a", "1  2"), ("b", "3")])
    );
}
