// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword-argument parsing tests.

use super::helpers::{kwargs, pairs, path};

#[test]
fn single_kwarg() {
    assert_eq!(kwargs("set k=v"), pairs(&[("k", "v")]));
    assert_eq!(path("set k=v"), vec!["set"]);
}

#[test]
fn multiple_kwargs_in_order() {
    assert_eq!(
        kwargs("add r=100 g=150 b=200"),
        pairs(&[("r", "100"), ("g", "150"), ("b", "200")])
    );
}

#[test]
fn duplicate_keys_preserved() {
    // Last-wins (or any other) policy belongs to the consumer
    assert_eq!(
        kwargs("set k=1 k=2"),
        pairs(&[("k", "1"), ("k", "2")])
    );
}

#[test]
fn keys_may_contain_digits_hyphens_underscores() {
    assert_eq!(
        kwargs("set max-retries=3 _tag2=x"),
        pairs(&[("max-retries", "3"), ("_tag2", "x")])
    );
}

#[yare::parameterized(
    url       = { "http://example.com/a,b" },
    ratio     = { "16:9" },
    path      = { "/var/log/app.log" },
    semver    = { "1.2.3-rc.1" },
    shell_ish = { "$(date)" },
)]
fn punctuation_stays_in_the_value(value: &str) {
    assert_eq!(kwargs(&format!("set k={value}")), pairs(&[("k", value)]));
}

#[test]
fn escaped_separator_in_value() {
    assert_eq!(kwargs(r"set k=a\=b"), pairs(&[("k", "a=b")]));
}

#[test]
fn escaped_backslash_in_value() {
    assert_eq!(kwargs(r"set k=a\\b"), pairs(&[("k", r"a\b")]));
}

#[test]
fn unquoted_value_stops_at_whitespace() {
    assert_eq!(
        kwargs("set k=one two=2"),
        pairs(&[("k", "one"), ("two", "2")])
    );
}

#[test]
fn kwargs_after_nested_chain() {
    let input = "git remote add name=origin";
    assert_eq!(path(input), vec!["git", "remote", "add"]);
    assert_eq!(kwargs(input), pairs(&[("name", "origin")]));
}
