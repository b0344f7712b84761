//! Parse tree model
//!
//! The combinators build an EBNF-shaped tree out of [`Node`]s. See [node] for the
//! flattening and length rules, [builder] for how productions are accumulated, and
//! [treeviz] for the text rendering used in tests and debugging.

pub mod builder;
pub mod node;
pub mod treeviz;

pub use builder::ProductionBuilder;
pub use node::{Node, TERMINAL_RULE};
pub use treeviz::to_treeviz_str;

use serde::Serialize;

/// Serialize a parse tree to pretty-printed JSON.
pub fn to_json<T: Serialize>(node: &Node<'_, T>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}
