//! Terminal matching
//!
//! A terminal looks at the first token only. What it looks for is described by a
//! [`TerminalSpec`]:
//!
//!     - Predicate: any `Fn(&T) -> bool`.
//!     - Literal: the token's value equals the string exactly.
//!     - Pattern: the regex finds a match anywhere in the token's value. Anchor the
//!       pattern (`^...$`) for whole-value matches.
//!     - Structured: the token's kind equals `kind`, and, when given, its value satisfies
//!       `value` (either exactly or by pattern).
//!
//! Spec shapes are decided once, when the spec is built, so matching a token is a single
//! `match` on the variant.

use std::fmt;
use std::sync::Arc;

use log::trace;
use regex::Regex;

use super::matcher::{curry, Matcher};
use crate::error::SpecError;
use crate::token::Token;
use crate::tree::Node;

type Predicate<T> = dyn Fn(&T) -> bool + Send + Sync;

/// What a terminal matcher accepts.
pub enum TerminalSpec<T> {
    Predicate(Arc<Predicate<T>>),
    Literal(String),
    Pattern(Regex),
    Structured {
        kind: String,
        value: Option<ValuePattern>,
    },
}

/// Constraint on a token's value inside a structured spec.
#[derive(Debug, Clone)]
pub enum ValuePattern {
    Exact(String),
    Pattern(Regex),
}

fn compile(pattern: &str) -> Result<Regex, SpecError> {
    Regex::new(pattern).map_err(|source| SpecError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl ValuePattern {
    pub fn pattern(pattern: &str) -> Result<Self, SpecError> {
        compile(pattern).map(ValuePattern::Pattern)
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            ValuePattern::Exact(expected) => expected == value,
            ValuePattern::Pattern(regex) => regex.is_match(value),
        }
    }
}

impl<T> TerminalSpec<T> {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        TerminalSpec::Predicate(Arc::new(f))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        TerminalSpec::Literal(value.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, SpecError> {
        compile(pattern).map(TerminalSpec::Pattern)
    }

    /// Any token of the given kind.
    pub fn kind(kind: impl Into<String>) -> Self {
        TerminalSpec::Structured {
            kind: kind.into(),
            value: None,
        }
    }

    /// A token of the given kind with exactly this value.
    pub fn kind_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        TerminalSpec::Structured {
            kind: kind.into(),
            value: Some(ValuePattern::Exact(value.into())),
        }
    }

    /// A token of the given kind whose value matches `pattern`.
    pub fn kind_matching(kind: impl Into<String>, pattern: &str) -> Result<Self, SpecError> {
        Ok(TerminalSpec::Structured {
            kind: kind.into(),
            value: Some(ValuePattern::pattern(pattern)?),
        })
    }
}

impl<T: Token> TerminalSpec<T> {
    pub fn accepts(&self, token: &T) -> bool {
        match self {
            TerminalSpec::Predicate(predicate) => predicate(token),
            TerminalSpec::Literal(expected) => token.value() == expected,
            TerminalSpec::Pattern(regex) => regex.is_match(token.value()),
            TerminalSpec::Structured { kind, value } => {
                token.kind() == kind
                    && value
                        .as_ref()
                        .map_or(true, |value| value.accepts(token.value()))
            }
        }
    }
}

impl<T> Clone for TerminalSpec<T> {
    fn clone(&self) -> Self {
        match self {
            TerminalSpec::Predicate(predicate) => TerminalSpec::Predicate(Arc::clone(predicate)),
            TerminalSpec::Literal(value) => TerminalSpec::Literal(value.clone()),
            TerminalSpec::Pattern(regex) => TerminalSpec::Pattern(regex.clone()),
            TerminalSpec::Structured { kind, value } => TerminalSpec::Structured {
                kind: kind.clone(),
                value: value.clone(),
            },
        }
    }
}

impl<T> fmt::Debug for TerminalSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalSpec::Predicate(_) => f.write_str("Predicate(..)"),
            TerminalSpec::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            TerminalSpec::Pattern(regex) => f.debug_tuple("Pattern").field(regex).finish(),
            TerminalSpec::Structured { kind, value } => f
                .debug_struct("Structured")
                .field("kind", kind)
                .field("value", value)
                .finish(),
        }
    }
}

impl<T> From<&str> for TerminalSpec<T> {
    fn from(value: &str) -> Self {
        TerminalSpec::literal(value)
    }
}

impl<T> From<String> for TerminalSpec<T> {
    fn from(value: String) -> Self {
        TerminalSpec::Literal(value)
    }
}

impl<T> From<Regex> for TerminalSpec<T> {
    fn from(regex: Regex) -> Self {
        TerminalSpec::Pattern(regex)
    }
}

/// Match the first token of `tokens` against `spec`.
pub fn expect_terminal<'t, T: Token>(
    spec: &TerminalSpec<T>,
    tokens: &'t [T],
) -> Option<Node<'t, T>> {
    let first = tokens.first()?;
    if spec.accepts(first) {
        trace!("terminal {:?} matched {:?}", spec, first.value());
        Some(Node::terminal(first))
    } else {
        None
    }
}

/// A matcher for a single token.
pub fn terminal<T>(spec: impl Into<TerminalSpec<T>>) -> Matcher<T>
where
    T: Token + 'static,
{
    let spec: TerminalSpec<T> = spec.into();
    curry(spec, expect_terminal)
}
