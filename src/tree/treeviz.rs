//! Treeviz formatter for parse trees
//!
//! One line per node, nesting shown with box-drawing connectors:
//!
//!     § expr
//!     ├─ ◦ num 1
//!     ├─ ◦ op +
//!     └─ ◦ num 2
//!
//! Icons
//!     Named production: §
//!     Anonymous production: ○
//!     Terminal: ◦
//!
//! Labels are truncated to 30 characters.

use super::node::Node;
use crate::token::Token;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon<T>(node: &Node<'_, T>) -> &'static str {
    match node {
        Node::Named { .. } => "§",
        Node::Anonymous { .. } => "○",
        Node::Terminal(_) => "◦",
    }
}

fn label<T: Token>(node: &Node<'_, T>) -> String {
    match node {
        Node::Terminal(token) => format!("{} {}", token.kind(), token.value()),
        _ => node.rule_name().to_string(),
    }
}

fn format_children<T: Token>(node: &Node<'_, T>, prefix: &str, output: &mut String) {
    let children = node.contents();
    for (index, child) in children.iter().enumerate() {
        let is_last = index == children.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };

        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            get_icon(child),
            truncate(&label(child), MAX_LABEL_CHARS)
        ));

        let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        format_children(child, &child_prefix, output);
    }
}

/// Render a parse tree as treeviz text.
pub fn to_treeviz_str<T: Token>(node: &Node<'_, T>) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(node),
        truncate(&label(node), MAX_LABEL_CHARS)
    );
    format_children(node, "", &mut output);
    output
}
