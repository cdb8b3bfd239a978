//! Block segmentation.
//!
//! A document is split into blocks on blank lines. A block whose text starts
//! with `# ` is a heading; its leading `#` and space characters are stripped
//! before inline parsing. Everything else is a paragraph.

use regex::Regex;
use std::sync::LazyLock;
use undermark_core::{Block, BlockKind};

/// Regex for blank-line block separators (CRLF form tried first)
static BLOCK_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n\r\n|\n\n").unwrap());

/// Prefix that marks a heading block.
pub const HEADING_PREFIX: &str = "# ";

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Split a document into unparsed blocks.
///
/// Empty pieces (from runs of blank lines or leading/trailing line breaks)
/// are dropped.
///
/// # Example
///
/// ```
/// use undermark_core::BlockKind;
/// use undermark_parser::segment;
///
/// let blocks = segment("# Title\n\nBody text\n");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].kind(), BlockKind::Heading);
/// assert_eq!(blocks[0].raw_text(), "Title");
/// assert_eq!(blocks[1].raw_text(), "Body text");
/// ```
pub fn segment(text: &str) -> Vec<Block> {
    BLOCK_SEPARATOR_RE
        .split(text)
        .map(|piece| piece.trim_matches(is_line_break))
        .filter(|piece| !piece.is_empty())
        .map(classify)
        .collect()
}

/// Decide the kind of a single block and strip the heading marker.
pub fn classify(piece: &str) -> Block {
    if piece.starts_with(HEADING_PREFIX) {
        Block::new(piece.trim_start_matches(['#', ' ']), BlockKind::Heading)
    } else {
        Block::new(piece, BlockKind::Paragraph)
    }
}
