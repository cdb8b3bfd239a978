//! Undermark Render
//!
//! Turns parsed blocks into an HTML fragment: headings become `<h1>`,
//! paragraphs `<p>`, emphasis `<em>` and strong text `<strong>`.
//!
//! Text is written verbatim; the dialect has no HTML escaping.
//!
//! # Example
//!
//! ```
//! use undermark_core::{Block, BlockKind, Node};
//! use undermark_render::render_blocks;
//!
//! let block = Block::with_inlines("__x__", BlockKind::Paragraph, vec![Node::Strong("x".into())]);
//! assert_eq!(render_blocks(&[block]), "<p><strong>x</strong></p>");
//! ```

pub mod heading;

pub use heading::render_heading_strong;

use log::debug;
use std::io::Write;
use undermark_core::{Block, BlockKind, Node};

pub const EM_OPEN: &str = "<em>";
pub const EM_CLOSE: &str = "</em>";
pub const STRONG_OPEN: &str = "<strong>";
pub const STRONG_CLOSE: &str = "</strong>";
pub const HEADING_OPEN: &str = "<h1>";
pub const HEADING_CLOSE: &str = "</h1>";
pub const PARAGRAPH_OPEN: &str = "<p>";
pub const PARAGRAPH_CLOSE: &str = "</p>";

/// Separator written between blocks unless configured otherwise.
pub const DEFAULT_BLOCK_SEPARATOR: &str = "\n";

fn push_wrapped(out: &mut String, open: &str, text: &str, close: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(open);
    out.push_str(text);
    out.push_str(close);
}

/// Render a block's nodes without the block wrapper.
///
/// In paragraphs every `Strong` node gets its own tag pair. In headings a
/// `Strong` node opens one `<strong>` that also swallows the emphasis and
/// strong nodes right after it (see [`heading`]).
pub fn render_inlines(nodes: &[Node], kind: BlockKind) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < nodes.len() {
        match &nodes[i] {
            Node::Text(text) => out.push_str(text),
            Node::Emphasis(text) => push_wrapped(&mut out, EM_OPEN, text, EM_CLOSE),
            Node::Strong(_) if kind == BlockKind::Heading => {
                i = render_heading_strong(&mut out, nodes, i);
                continue;
            }
            Node::Strong(text) => push_wrapped(&mut out, STRONG_OPEN, text, STRONG_CLOSE),
        }
        i += 1;
    }

    out
}

/// Render one block including its `<h1>`/`<p>` wrapper.
pub fn render_block(block: &Block) -> String {
    let inner = render_inlines(block.inlines(), block.kind());
    let (open, close) = match block.kind() {
        BlockKind::Heading => (HEADING_OPEN, HEADING_CLOSE),
        BlockKind::Paragraph => (PARAGRAPH_OPEN, PARAGRAPH_CLOSE),
    };
    format!("{}{}{}", open, inner, close)
}

/// Render all blocks, one per line, with no line break after the last.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(DEFAULT_BLOCK_SEPARATOR)
}

/// Streaming HTML renderer.
///
/// Writes blocks one at a time to any [`Write`], putting the separator
/// between consecutive blocks.
///
/// # Example
///
/// ```
/// use undermark_core::{Block, BlockKind, Node};
/// use undermark_render::HtmlRenderer;
///
/// let mut output = Vec::new();
/// let mut renderer = HtmlRenderer::with_separator(&mut output, "\r\n");
/// renderer.render_block(&Block::with_inlines("a", BlockKind::Heading, vec![Node::Text("a".into())])).unwrap();
/// renderer.render_block(&Block::with_inlines("b", BlockKind::Paragraph, vec![Node::Text("b".into())])).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "<h1>a</h1>\r\n<p>b</p>");
/// ```
pub struct HtmlRenderer<W: Write> {
    writer: W,
    separator: String,
    blocks_written: usize,
}

impl<W: Write> HtmlRenderer<W> {
    /// Create a renderer using a single line feed between blocks.
    pub fn new(writer: W) -> Self {
        Self::with_separator(writer, DEFAULT_BLOCK_SEPARATOR)
    }

    /// Create a renderer with a custom block separator.
    pub fn with_separator(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            blocks_written: 0,
        }
    }

    /// Write one block.
    pub fn render_block(&mut self, block: &Block) -> std::io::Result<()> {
        if self.blocks_written > 0 {
            self.writer.write_all(self.separator.as_bytes())?;
        }
        self.writer.write_all(render_block(block).as_bytes())?;
        self.blocks_written += 1;
        Ok(())
    }

    /// Write every block in order.
    pub fn render_all(&mut self, blocks: &[Block]) -> std::io::Result<()> {
        for block in blocks {
            self.render_block(block)?;
        }
        debug!("rendered {} blocks", blocks.len());
        Ok(())
    }

    /// Number of blocks written so far.
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
