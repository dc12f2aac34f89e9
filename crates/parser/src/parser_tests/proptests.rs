// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests over the full pipeline.

use proptest::prelude::*;

use crate::parser::Parser;

/// Render a command line from a keyword chain and kwarg pairs, joining
/// tokens with the given separator.
fn render(keywords: &[String], kwargs: &[(String, String)], sep: &str) -> String {
    let mut tokens: Vec<String> = keywords.to_vec();
    tokens.extend(kwargs.iter().map(|(k, v)| format!("{k}={v}")));
    tokens.join(sep)
}

fn keyword() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,5}"
}

fn value() -> impl Strategy<Value = String> {
    "[a-z0-9./:]{1,6}"
}

proptest! {
    #[test]
    fn parsing_never_panics(input in "[ -~]{0,80}") {
        let _ = Parser::parse(&input);
    }

    #[test]
    fn path_and_kwargs_reflect_the_input(
        keywords in prop::collection::vec(keyword(), 1..4),
        kwargs in prop::collection::vec((keyword(), value()), 0..4),
    ) {
        let input = render(&keywords, &kwargs, " ");
        let node = Parser::parse(&input).unwrap();
        prop_assert_eq!(node.keyword_path(), keywords.iter().map(String::as_str).collect::<Vec<_>>());
        let parsed: Vec<(String, String)> = node
            .kwargs()
            .iter()
            .map(|kw| (kw.key.clone(), kw.value.clone()))
            .collect();
        prop_assert_eq!(parsed, kwargs);
    }

    #[test]
    fn whitespace_runs_do_not_change_the_parse(
        keywords in prop::collection::vec(keyword(), 1..4),
        kwargs in prop::collection::vec((keyword(), value()), 0..3),
        sep in "[ \t]{1,4}",
    ) {
        let canonical = Parser::parse(&render(&keywords, &kwargs, " ")).unwrap();
        let padded = Parser::parse(&render(&keywords, &kwargs, &sep)).unwrap();
        prop_assert_eq!(canonical, padded);
    }

    #[test]
    fn accessors_are_pure(
        keywords in prop::collection::vec(keyword(), 1..4),
        kwargs in prop::collection::vec((keyword(), value()), 0..3),
    ) {
        let node = Parser::parse(&render(&keywords, &kwargs, " ")).unwrap();
        prop_assert_eq!(node.keyword_path(), node.keyword_path());
        prop_assert_eq!(node.kwargs(), node.kwargs());
    }

    #[test]
    fn quoted_values_round_trip(value in r#"[a-z ]{0,10}"#) {
        let input = format!(r#"set k="{value}""#);
        let node = Parser::parse(&input).unwrap();
        prop_assert_eq!(&node.kwargs()[0].value, &value);
    }
}
