//! Sequence, alternation, optional and repetition
//!
//! Each combinator collects its matches in an anonymous production, which disappears
//! once it is pushed into a parent (see [`crate::tree::node`]). Sequence and alternation
//! can fail; optional and repetition always succeed, possibly with zero children, so
//! their full-application forms return a [`Node`] rather than an `Option`.

use log::{debug, trace};

use super::matcher::{curry, rest_after, Matcher};
use crate::tree::{Node, ProductionBuilder};

/// Match every matcher in order, each against what the previous ones left.
pub fn expect_sequence<'t, T>(matchers: &[Matcher<T>], tokens: &'t [T]) -> Option<Node<'t, T>> {
    let mut production = ProductionBuilder::anonymous("sequence");
    let mut rest = tokens;

    for (index, matcher) in matchers.iter().enumerate() {
        let Some(next) = matcher.matches(rest) else {
            trace!("sequence failed at element {}", index);
            return None;
        };
        rest = rest_after(rest, &next);
        production.push(next);
    }

    Some(production.finish())
}

/// Return the first alternative that matches at the start of `tokens`.
///
/// Ordered choice: a later alternative is never tried once an earlier one matched, even
/// if the later one would consume more tokens.
pub fn expect_alternation<'t, T>(
    alternatives: &[Matcher<T>],
    tokens: &'t [T],
) -> Option<Node<'t, T>> {
    let found = alternatives
        .iter()
        .enumerate()
        .find_map(|(index, alternative)| alternative.matches(tokens).map(|node| (index, node)));

    match found {
        Some((index, node)) => {
            trace!("alternation chose alternative {}", index);
            Some(node)
        }
        None => {
            trace!("alternation: none of {} alternatives matched", alternatives.len());
            None
        }
    }
}

/// Match `matcher` once if possible.
pub fn expect_optional<'t, T>(matcher: &Matcher<T>, tokens: &'t [T]) -> Node<'t, T> {
    let mut production = ProductionBuilder::anonymous("option");
    if let Some(node) = matcher.matches(tokens) {
        production.push(node);
    }
    production.finish()
}

/// Match `matcher` as many times as it will go.
pub fn expect_repetition<'t, T>(matcher: &Matcher<T>, tokens: &'t [T]) -> Node<'t, T> {
    repeat(matcher, None, tokens)
}

/// Match `matcher` at most `max` times.
pub fn expect_repetition_bounded<'t, T>(
    matcher: &Matcher<T>,
    max: usize,
    tokens: &'t [T],
) -> Node<'t, T> {
    repeat(matcher, Some(max), tokens)
}

// A match that consumes nothing would never advance, so it ends the loop and is dropped.
fn repeat<'t, T>(matcher: &Matcher<T>, max: Option<usize>, tokens: &'t [T]) -> Node<'t, T> {
    let mut production = ProductionBuilder::anonymous("repetition");
    let mut rest = tokens;
    let mut count = 0;

    while !rest.is_empty() && max.map_or(true, |max| count < max) {
        let Some(next) = matcher.matches(rest) else {
            break;
        };
        if next.is_empty() {
            debug!("repetition stopped on a zero-width match after {} iterations", count);
            break;
        }
        rest = rest_after(rest, &next);
        production.push(next);
        count += 1;
    }

    trace!("repetition matched {} times", count);
    production.finish()
}

pub fn sequence<T: 'static>(matchers: impl IntoIterator<Item = Matcher<T>>) -> Matcher<T> {
    let matchers: Vec<Matcher<T>> = matchers.into_iter().collect();
    curry(matchers, |matchers, tokens| expect_sequence(matchers, tokens))
}

pub fn alternation<T: 'static>(alternatives: impl IntoIterator<Item = Matcher<T>>) -> Matcher<T> {
    let alternatives: Vec<Matcher<T>> = alternatives.into_iter().collect();
    curry(alternatives, |alternatives, tokens| {
        expect_alternation(alternatives, tokens)
    })
}

pub fn optional<T: 'static>(matcher: Matcher<T>) -> Matcher<T> {
    curry(matcher, |matcher, tokens| Some(expect_optional(matcher, tokens)))
}

pub fn repetition<T: 'static>(matcher: Matcher<T>) -> Matcher<T> {
    curry(matcher, |matcher, tokens| Some(expect_repetition(matcher, tokens)))
}

pub fn repetition_bounded<T: 'static>(matcher: Matcher<T>, max: usize) -> Matcher<T> {
    curry(matcher, move |matcher, tokens| {
        Some(expect_repetition_bounded(matcher, max, tokens))
    })
}

/// Wrap whatever `matcher` matches in a named production.
pub fn rule<T: 'static>(rule_name: impl Into<String>, matcher: Matcher<T>) -> Matcher<T> {
    let rule_name = rule_name.into();
    curry((rule_name, matcher), |spec, tokens| {
        let (rule_name, matcher) = spec;
        matcher
            .matches(tokens)
            .map(|node| Node::named(rule_name.as_str(), [node]))
    })
}
