//! Terminal spec behavior across every spec shape
//!
//! Each case runs a terminal matcher against a single-token stream and checks whether it
//! matched.

use ebnf_expect::{terminal, SimpleToken, TerminalSpec, Token};
use rstest::rstest;

fn token(kind: &str, value: &str) -> Vec<SimpleToken> {
    vec![SimpleToken::new(kind, value)]
}

#[rstest]
#[case::exact("+", "op", "+", true)]
#[case::different_value("+", "op", "-", false)]
#[case::kind_is_ignored("x", "identifier", "x", true)]
#[case::no_partial_match("ab", "identifier", "abc", false)]
#[case::empty_literal("", "text", "", true)]
fn test_literal_spec(
    #[case] spec: &str,
    #[case] kind: &str,
    #[case] value: &str,
    #[case] expected: bool,
) {
    let matcher = terminal(spec);
    assert_eq!(matcher.matches(&token(kind, value)).is_some(), expected);
}

#[rstest]
#[case::digits(r"^\d+$", "42", true)]
#[case::letters_rejected(r"^\d+$", "4a", false)]
#[case::search_anywhere(r"\d", "abc1", true)]
#[case::alternatives("^(let|var)$", "var", true)]
fn test_pattern_spec(#[case] pattern: &str, #[case] value: &str, #[case] expected: bool) {
    let matcher = terminal(TerminalSpec::pattern(pattern).unwrap());
    assert_eq!(matcher.matches(&token("any", value)).is_some(), expected);
}

#[rstest]
#[case::kind_only_any_value("num", None, "num", "7", true)]
#[case::kind_mismatch("num", None, "op", "7", false)]
#[case::kind_and_value("op", Some("+"), "op", "+", true)]
#[case::value_mismatch("op", Some("+"), "op", "-", false)]
#[case::value_matches_but_kind_does_not("op", Some("+"), "punct", "+", false)]
fn test_structured_spec(
    #[case] kind: &str,
    #[case] value: Option<&str>,
    #[case] token_kind: &str,
    #[case] token_value: &str,
    #[case] expected: bool,
) {
    let spec = match value {
        Some(value) => TerminalSpec::kind_value(kind, value),
        None => TerminalSpec::kind(kind),
    };
    let matcher = terminal(spec);
    assert_eq!(
        matcher.matches(&token(token_kind, token_value)).is_some(),
        expected
    );
}

#[rstest]
#[case::matches("ident", "^[a-z_]+$", "ident", "foo_bar", true)]
#[case::value_rejected("ident", "^[a-z_]+$", "ident", "Foo", false)]
#[case::kind_rejected("ident", "^[a-z_]+$", "keyword", "foo", false)]
fn test_structured_spec_with_value_pattern(
    #[case] kind: &str,
    #[case] pattern: &str,
    #[case] token_kind: &str,
    #[case] token_value: &str,
    #[case] expected: bool,
) {
    let matcher = terminal(TerminalSpec::kind_matching(kind, pattern).unwrap());
    assert_eq!(
        matcher.matches(&token(token_kind, token_value)).is_some(),
        expected
    );
}

#[test]
fn test_predicate_spec() {
    let short_identifier = terminal(TerminalSpec::predicate(|t: &SimpleToken| {
        t.kind() == "identifier" && t.value().len() <= 3
    }));

    assert!(short_identifier
        .matches(&token("identifier", "abc"))
        .is_some());
    assert!(short_identifier
        .matches(&token("identifier", "abcd"))
        .is_none());
    assert!(short_identifier.matches(&token("number", "1")).is_none());
}

#[test]
fn test_every_spec_rejects_empty_input() {
    let specs: Vec<TerminalSpec<SimpleToken>> = vec![
        TerminalSpec::literal("x"),
        TerminalSpec::pattern(".*").unwrap(),
        TerminalSpec::kind("num"),
        TerminalSpec::predicate(|_: &SimpleToken| true),
    ];
    for spec in specs {
        assert!(terminal(spec).matches(&[]).is_none());
    }
}

#[test]
fn test_matched_terminal_wraps_the_first_token() {
    let stream = vec![SimpleToken::new("num", "1"), SimpleToken::new("num", "2")];
    let node = terminal(TerminalSpec::kind("num")).matches(&stream).unwrap();

    assert!(node.is_terminal());
    assert_eq!(node.len(), 1);
    assert_eq!(node.own_len(), 1);
    assert!(std::ptr::eq(node.token().unwrap(), &stream[0]));
}
