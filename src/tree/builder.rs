//! Production builder
//!
//! Combinators accumulate their matches here and only turn the builder into a [`Node`]
//! once the whole match succeeded. A failed attempt simply drops the builder.

use super::node::Node;

/// Accumulates children for a production under construction.
#[derive(Debug)]
pub struct ProductionBuilder<'t, T> {
    rule_name: String,
    anonymous: bool,
    contents: Vec<Node<'t, T>>,
}

impl<'t, T> ProductionBuilder<'t, T> {
    pub fn named(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            anonymous: false,
            contents: Vec::new(),
        }
    }

    pub fn anonymous(rule_name: &str) -> Self {
        Self {
            rule_name: format!("<{rule_name}>"),
            anonymous: true,
            contents: Vec::new(),
        }
    }

    /// Append a child. Anonymous children are flattened: their contents are spliced in
    /// and the wrapper itself is discarded.
    pub fn push(&mut self, node: Node<'t, T>) -> &mut Self {
        match node {
            Node::Anonymous { contents, .. } => self.contents.extend(contents),
            other => self.contents.push(other),
        }
        self
    }

    pub fn with_contents(mut self, nodes: impl IntoIterator<Item = Node<'t, T>>) -> Self {
        for node in nodes {
            self.push(node);
        }
        self
    }

    /// Tokens consumed by the children pushed so far.
    pub fn consumed(&self) -> usize {
        self.contents.iter().map(Node::len).sum()
    }

    pub fn finish(self) -> Node<'t, T> {
        if self.anonymous {
            Node::Anonymous {
                rule_name: self.rule_name,
                contents: self.contents,
            }
        } else {
            Node::Named {
                rule_name: self.rule_name,
                contents: self.contents,
            }
        }
    }
}
