//! Error types
//!
//! A grammar failing to match is never an error: matchers return `None`. The types here
//! cover setup mistakes (bad patterns, broken rule tables) and the grammar-level
//! `parse` entry point.

use std::fmt;

/// Errors raised while building a terminal spec.
#[derive(Debug, Clone)]
pub enum SpecError {
    /// A pattern string failed to compile
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid terminal pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// Errors raised while defining or finalizing a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A rule with this name is already defined
    DuplicateRule(String),
    /// A rule is referenced but never defined
    UndefinedRule { name: String },
    /// The requested start rule is not defined
    NoStartRule(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateRule(name) => write!(f, "Rule '{}' is already defined", name),
            GrammarError::UndefinedRule { name } => {
                write!(f, "Rule '{}' is referenced but never defined", name)
            }
            GrammarError::NoStartRule(name) => write!(f, "Start rule '{}' is not defined", name),
        }
    }
}

impl std::error::Error for GrammarError {}

/// Outcome of a failed grammar-level parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The start rule did not match
    NoMatch,
    /// The start rule matched but left tokens behind
    Incomplete { consumed: usize, total: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatch => write!(f, "Input does not match the start rule"),
            ParseError::Incomplete { consumed, total } => write!(
                f,
                "Start rule consumed {} of {} tokens",
                consumed, total
            ),
        }
    }
}

impl std::error::Error for ParseError {}
