//! Property-based tests for the combinators
//!
//! Token streams are drawn from a tiny alphabet so that grammars hit both matches and
//! misses often.

use ebnf_expect::{
    alternation, expect_optional, expect_repetition, optional, repetition, rest_after, rule,
    sequence, terminal, Matcher, Node, ProductionBuilder, SimpleToken, TerminalSpec,
};
use proptest::prelude::*;

fn token_strategy() -> impl Strategy<Value = SimpleToken> {
    (
        prop_oneof![Just("a"), Just("b"), Just("c")],
        "[xyz]{0,2}",
    )
        .prop_map(|(kind, value)| SimpleToken::new(kind, value))
}

fn stream_strategy() -> impl Strategy<Value = Vec<SimpleToken>> {
    prop::collection::vec(token_strategy(), 0..8)
}

fn kind(name: &str) -> Matcher<SimpleToken> {
    terminal(TerminalSpec::kind(name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_literal_matches_iff_values_equal(spec in "[xyz]{0,2}", token in token_strategy()) {
        let matched = terminal(spec.as_str()).matches(std::slice::from_ref(&token)).is_some();
        prop_assert_eq!(matched, token.value == spec);
    }

    #[test]
    fn test_structured_spec_is_a_conjunction(
        kind_spec in "[abc]",
        value_spec in "[xyz]{0,2}",
        token in token_strategy(),
    ) {
        let stream = std::slice::from_ref(&token);

        let both = terminal(TerminalSpec::kind_value(kind_spec.as_str(), value_spec.as_str()));
        prop_assert_eq!(
            both.matches(stream).is_some(),
            token.kind == kind_spec && token.value == value_spec
        );

        let kind_only = terminal(TerminalSpec::kind(kind_spec.as_str()));
        prop_assert_eq!(kind_only.matches(stream).is_some(), token.kind == kind_spec);
    }

    #[test]
    fn test_sequence_is_atomic(stream in stream_strategy()) {
        let grammar = sequence([kind("a"), kind("b")]);
        let expected = stream.len() >= 2 && stream[0].kind == "a" && stream[1].kind == "b";

        match grammar.matches(&stream) {
            Some(node) => {
                prop_assert!(expected);
                prop_assert_eq!(node.len(), 2);
            }
            None => prop_assert!(!expected),
        }
    }

    #[test]
    fn test_alternation_returns_first_listed_match(stream in stream_strategy()) {
        let first = rule("first", kind("a"));
        let second = rule("second", terminal(TerminalSpec::predicate(|_: &SimpleToken| true)));
        let grammar = alternation([first, second]);

        match grammar.matches(&stream) {
            Some(node) => {
                let expected = if stream[0].kind == "a" { "first" } else { "second" };
                prop_assert_eq!(node.rule_name(), expected);
            }
            None => prop_assert!(stream.is_empty()),
        }
    }

    #[test]
    fn test_optional_and_repetition_never_fail(stream in stream_strategy()) {
        prop_assert!(optional(kind("a")).matches(&stream).is_some());
        prop_assert!(repetition(kind("a")).matches(&stream).is_some());
        prop_assert!(repetition(optional(kind("a"))).matches(&stream).is_some());
    }

    #[test]
    fn test_repetition_consumes_the_leading_run(stream in stream_strategy()) {
        let run = stream.iter().take_while(|t| t.kind == "a").count();
        let node = expect_repetition(&kind("a"), &stream);

        prop_assert_eq!(node.len(), run);
        prop_assert_eq!(node.own_len(), run);
        prop_assert_eq!(rest_after(&stream, &node), &stream[run..]);
    }

    #[test]
    fn test_length_agrees_with_consumption(stream in stream_strategy()) {
        let head = sequence([repetition(kind("a")), optional(kind("b"))]);
        let node = head.matches(&stream).unwrap();
        let rest = rest_after(&stream, &node);

        let consumed: Vec<&SimpleToken> = stream[..node.len()].iter().collect();
        prop_assert_eq!(node.terminals(), consumed);
        prop_assert_eq!(rest.len(), stream.len() - node.len());

        // The element after `head` in a sequence sees exactly `rest`.
        let tail = rule("tail", repetition(terminal(TerminalSpec::predicate(|_: &SimpleToken| true))));
        let whole = sequence([head, tail]).matches(&stream).unwrap();
        let tail_node = whole.contents().last().unwrap();
        prop_assert_eq!(tail_node.terminals().len(), rest.len());
    }

    #[test]
    fn test_pushing_anonymous_splices_children(stream in stream_strategy()) {
        let group = Node::anonymous("group", stream.iter().map(Node::terminal));

        let mut parent = ProductionBuilder::named("parent");
        parent.push(group);
        prop_assert_eq!(parent.finish().own_len(), stream.len());

        let named = Node::named("child", stream.iter().map(Node::terminal));
        let mut parent = ProductionBuilder::named("parent");
        parent.push(named);
        prop_assert_eq!(parent.finish().own_len(), 1);
    }

    #[test]
    fn test_optional_miss_consumes_nothing(stream in stream_strategy()) {
        let node = expect_optional(&kind("missing"), &stream);
        prop_assert!(node.is_empty());
        prop_assert_eq!(rest_after(&stream, &node), &stream[..]);
    }
}
