//! Strong text inside headings.
//!
//! The parser splits strong text that contains emphasis into
//! `Strong, Emphasis, Strong`. In a heading these pieces are put back
//! together under a single `<strong>`: following `Emphasis` nodes keep their
//! `<em>`, following `Strong` nodes contribute bare text, and the wrapper
//! closes at the first `Text` node or the end of the block.

use crate::{EM_CLOSE, EM_OPEN, STRONG_CLOSE, STRONG_OPEN};
use undermark_core::Node;

/// Render the strong run starting at `nodes[start]` into `out`.
///
/// Returns the index of the first node that was not consumed.
pub fn render_heading_strong(out: &mut String, nodes: &[Node], start: usize) -> usize {
    out.push_str(STRONG_OPEN);
    out.push_str(nodes[start].text());

    let mut next = start + 1;
    while let Some(node) = nodes.get(next) {
        match node {
            Node::Emphasis(text) => {
                if !text.is_empty() {
                    out.push_str(EM_OPEN);
                    out.push_str(text);
                    out.push_str(EM_CLOSE);
                }
            }
            Node::Strong(text) => out.push_str(text),
            Node::Text(_) => break,
        }
        next += 1;
    }

    out.push_str(STRONG_CLOSE);
    next
}
