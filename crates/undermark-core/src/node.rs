//! Inline nodes.
//!
//! A block's text is parsed into a flat sequence of [`Node`]s. There is no
//! tree: strong text that contains emphasis is represented as a `Strong`
//! node, an `Emphasis` node and another `Strong` node side by side.

use serde::{Deserialize, Serialize};

/// A single inline node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "text")]
pub enum Node {
    /// Plain text
    Text(String),
    /// Text wrapped in single underscores
    Emphasis(String),
    /// Text wrapped in double underscores
    Strong(String),
}

impl Node {
    /// The node's text content, without any markup.
    pub fn text(&self) -> &str {
        match self {
            Node::Text(s) | Node::Emphasis(s) | Node::Strong(s) => s,
        }
    }

    /// Whether this is a plain text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Text(s) => write!(f, "text({:?})", s),
            Node::Emphasis(s) => write!(f, "emphasis({:?})", s),
            Node::Strong(s) => write!(f, "strong({:?})", s),
        }
    }
}

/// Concatenate the text of every node, dropping the markup.
pub fn plain_text(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text).collect()
}
