//! Block-level units.
//!
//! The segmenter produces blocks with only their raw text and kind; the
//! inline parser fills in the nodes once, after which the block is read-only.

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// A `# ` heading, rendered as `<h1>`
    Heading,
    /// Any other block, rendered as `<p>`
    Paragraph,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Heading => write!(f, "heading"),
            BlockKind::Paragraph => write!(f, "paragraph"),
        }
    }
}

/// A heading or paragraph with its parsed inline nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    raw_text: String,
    kind: BlockKind,
    inlines: Vec<Node>,
}

impl Block {
    /// Create a block that has not been inline-parsed yet.
    pub fn new(raw_text: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            kind,
            inlines: Vec::new(),
        }
    }

    /// Create a block with its nodes already known.
    pub fn with_inlines(raw_text: impl Into<String>, kind: BlockKind, inlines: Vec<Node>) -> Self {
        Self {
            raw_text: raw_text.into(),
            kind,
            inlines,
        }
    }

    /// Source text of the block, heading marker already stripped.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn inlines(&self) -> &[Node] {
        &self.inlines
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    /// Store the parsed nodes. A block is populated exactly once.
    pub fn set_inlines(&mut self, inlines: Vec<Node>) {
        debug_assert!(self.inlines.is_empty(), "block inlines populated twice");
        self.inlines = inlines;
    }
}
