//! Matching engine
//!
//!     This module holds the matching primitives. Each one is a pure function from a spec
//!     and a token slice to either a parse tree node or `None`:
//!
//!         terminal     one token, see [terminal]
//!         sequence     all of a list, in order
//!         alternation  the first of a list that matches
//!         optional     zero or one
//!         repetition   zero or more
//!
//!     The partially applied forms return a [`Matcher`], so grammars are written by nesting
//!     calls, much like the EBNF they transcribe:
//!
//!         sequence([
//!             terminal(TerminalSpec::kind("num")),
//!             repetition(sequence([terminal("+"), terminal(TerminalSpec::kind("num"))])),
//!         ])
//!
//!     Matchers keep no state between calls. Failure is plain control flow: a combinator
//!     that cannot match returns `None`, and nothing it built along the way is kept.

pub mod combinators;
pub mod matcher;
pub mod terminal;

pub use combinators::{
    alternation, expect_alternation, expect_optional, expect_repetition,
    expect_repetition_bounded, expect_sequence, optional, repetition, repetition_bounded, rule,
    sequence,
};
pub use matcher::{curry, rest_after, Matcher};
pub use terminal::{expect_terminal, terminal, TerminalSpec, ValuePattern};
