//! # ebnf-expect
//!
//! Token-level parser combinators that read like the EBNF they transcribe.
//!
//! Layout
//!
//!     src/
//!       ├── token      The token contract (kind + value) the matchers read
//!       ├── tree       Parse tree nodes, flattening, length accounting, rendering
//!       ├── matching   Terminal, sequence, alternation, optional, repetition
//!       ├── grammar    Named rules and references, for recursive grammars
//!       ├── config     Engine knobs layered over embedded defaults
//!       └── error      Setup and parse errors
//!
//! Tokens come from elsewhere: this crate does not tokenize text. A grammar is built by
//! composing [`Matcher`]s, and running it on a token slice yields either a [`Node`] or
//! `None`:
//!
//! ```rust,ignore
//! use ebnf_expect::{sequence, terminal, optional, rest_after, SimpleToken, TerminalSpec};
//!
//! let tokens = vec![SimpleToken::new("num", "1"), SimpleToken::new("op", "+")];
//! let grammar = sequence([
//!     terminal(TerminalSpec::kind("num")),
//!     optional(terminal(TerminalSpec::kind_value("op", "+"))),
//! ]);
//! let node = grammar.matches(&tokens).unwrap();
//! assert!(rest_after(&tokens, &node).is_empty());
//! ```

pub mod config;
pub mod error;
pub mod grammar;
pub mod matching;
pub mod token;
pub mod tree;

pub use config::{load_defaults, EngineConfig, Loader};
pub use error::{GrammarError, ParseError, SpecError};
pub use grammar::{CompiledGrammar, Grammar};
pub use matching::{
    alternation, curry, expect_alternation, expect_optional, expect_repetition,
    expect_repetition_bounded, expect_sequence, expect_terminal, optional, repetition,
    repetition_bounded, rest_after, rule, sequence, terminal, Matcher, TerminalSpec,
    ValuePattern,
};
pub use token::{SimpleToken, Token};
pub use tree::{to_json, to_treeviz_str, Node, ProductionBuilder};
