// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_and_len() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
}

#[test]
fn empty_span() {
    let span = Span::empty(4);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
    assert!(!span.contains(4));
}

#[test]
fn contains_is_half_open() {
    let span = Span::new(2, 5);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(4));
    assert!(!span.contains(5));
}

#[test]
fn merge_covers_both() {
    let a = Span::new(2, 4);
    let b = Span::new(6, 9);
    assert_eq!(a.merge(b), Span::new(2, 9));
    assert_eq!(b.merge(a), Span::new(2, 9));
}

#[test]
fn slice_extracts_text() {
    let span = Span::new(4, 7);
    assert_eq!(span.slice("add rgb color"), "rgb");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let span = Span::new(10, 20);
    assert_eq!(span.slice("short"), "");
}

#[test]
fn slice_uses_character_offsets() {
    // 'é' is two bytes but one character
    let span = Span::new(1, 2);
    assert_eq!(span.slice("héllo"), "é");
}

#[test]
fn context_snippet_points_at_span() {
    let input = "add r= g=2";
    let snippet = context_snippet(input, Span::new(6, 7), 30);
    let mut lines = snippet.lines();
    assert_eq!(lines.next().unwrap(), "add r= g=2");
    assert_eq!(lines.next().unwrap(), "      ^");
}

#[test]
fn context_snippet_trims_to_window() {
    let input = "aaaaaaaaaabbbbbbbbbb";
    let snippet = context_snippet(input, Span::new(10, 11), 3);
    let first = snippet.lines().next().unwrap();
    assert!(first.len() <= 7);
    assert!(first.contains('b'));
}

#[test]
fn context_snippet_at_end_of_input() {
    let input = "add";
    let snippet = context_snippet(input, Span::empty(3), 30);
    assert!(snippet.contains("add"));
    assert!(snippet.contains('^'));
}

#[test]
fn diagnostic_reports_one_indexed_column() {
    let input = "add \"rgb";
    let diag = diagnostic_context(input, Span::new(4, 5), "unterminated quote");
    assert!(diag.contains("error: unterminated quote"));
    assert!(diag.contains("column 5"));
    assert!(diag.contains("add \"rgb"));
}

#[test]
fn diagnostic_caret_under_span() {
    let diag = diagnostic_context("abcdef", Span::new(2, 4), "boom");
    let caret_line = diag.lines().last().unwrap();
    assert_eq!(caret_line, "   |   ^^");
}
