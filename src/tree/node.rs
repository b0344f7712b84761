//! Parse tree nodes
//!
//! A parse tree is made of three kinds of node:
//!
//!     - Named productions: a grammar rule matched, with its children in parse order.
//!     - Anonymous productions: transient groups produced by the combinators. They never
//!       survive being pushed into a parent; their children are spliced in instead.
//!     - Terminals: exactly one consumed token.
//!
//! Length
//!
//!     `len()` is the number of tokens a node consumed: 1 for a terminal, the recursive
//!     sum of the children for a production. Combinators advance through the input by
//!     this count. `own_len()` is the shallow child count and is only meant for
//!     structural inspection.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::builder::ProductionBuilder;

/// Rule name reported by terminal nodes.
pub const TERMINAL_RULE: &str = "<terminal>";

/// A node in the parse tree. Terminals borrow the token they consumed.
#[derive(Debug, PartialEq, Eq)]
pub enum Node<'t, T> {
    Named {
        rule_name: String,
        contents: Vec<Node<'t, T>>,
    },
    Anonymous {
        rule_name: String,
        contents: Vec<Node<'t, T>>,
    },
    Terminal(&'t T),
}

impl<'t, T> Node<'t, T> {
    /// Create a named production, pushing each of `initial_contents` in order.
    pub fn named(
        rule_name: impl Into<String>,
        initial_contents: impl IntoIterator<Item = Node<'t, T>>,
    ) -> Self {
        ProductionBuilder::named(rule_name)
            .with_contents(initial_contents)
            .finish()
    }

    /// Create an anonymous production. The name is wrapped in angle brackets
    /// (`sequence` becomes `<sequence>`).
    pub fn anonymous(
        rule_name: &str,
        initial_contents: impl IntoIterator<Item = Node<'t, T>>,
    ) -> Self {
        ProductionBuilder::anonymous(rule_name)
            .with_contents(initial_contents)
            .finish()
    }

    /// Wrap a single consumed token.
    pub fn terminal(token: &'t T) -> Self {
        Node::Terminal(token)
    }

    pub fn rule_name(&self) -> &str {
        match self {
            Node::Named { rule_name, .. } | Node::Anonymous { rule_name, .. } => rule_name,
            Node::Terminal(_) => TERMINAL_RULE,
        }
    }

    /// Children in parse order. Terminals have none.
    pub fn contents(&self) -> &[Node<'t, T>] {
        match self {
            Node::Named { contents, .. } | Node::Anonymous { contents, .. } => contents,
            Node::Terminal(_) => &[],
        }
    }

    /// The token wrapped by a terminal.
    pub fn token(&self) -> Option<&'t T> {
        match self {
            Node::Terminal(token) => Some(*token),
            _ => None,
        }
    }

    /// Consumed-token count.
    pub fn len(&self) -> usize {
        match self {
            Node::Terminal(_) => 1,
            Node::Named { contents, .. } | Node::Anonymous { contents, .. } => {
                contents.iter().map(Node::len).sum()
            }
        }
    }

    /// True when the node consumed no tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Immediate child count. A terminal reports 1 for its token, although its
    /// `contents()` is empty; reach the token through `token()`.
    pub fn own_len(&self) -> usize {
        match self {
            Node::Terminal(_) => 1,
            Node::Named { contents, .. } | Node::Anonymous { contents, .. } => contents.len(),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Node::Named { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Node::Anonymous { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }

    /// All consumed tokens under this node, left to right.
    pub fn terminals(&self) -> Vec<&'t T> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals(&self, out: &mut Vec<&'t T>) {
        match self {
            Node::Terminal(token) => out.push(*token),
            Node::Named { contents, .. } | Node::Anonymous { contents, .. } => {
                for child in contents {
                    child.collect_terminals(out);
                }
            }
        }
    }
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Node::Named {
                rule_name,
                contents,
            } => Node::Named {
                rule_name: rule_name.clone(),
                contents: contents.clone(),
            },
            Node::Anonymous {
                rule_name,
                contents,
            } => Node::Anonymous {
                rule_name: rule_name.clone(),
                contents: contents.clone(),
            },
            Node::Terminal(token) => Node::Terminal(*token),
        }
    }
}

impl<T: Serialize> Serialize for Node<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Terminal(token) => {
                let mut state = serializer.serialize_struct("Node", 2)?;
                state.serialize_field("rule", TERMINAL_RULE)?;
                state.serialize_field("token", token)?;
                state.end()
            }
            Node::Named {
                rule_name,
                contents,
            }
            | Node::Anonymous {
                rule_name,
                contents,
            } => {
                let mut state = serializer.serialize_struct("Node", 3)?;
                state.serialize_field("rule", rule_name)?;
                state.serialize_field("anonymous", &self.is_anonymous())?;
                state.serialize_field("contents", contents)?;
                state.end()
            }
        }
    }
}
