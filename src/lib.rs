//! Undermark - converts an underscore-emphasis markdown dialect into HTML.
//!
//! The dialect has `# ` headings, paragraphs separated by blank lines,
//! `_emphasis_`, `__strong__` and backslash escapes (`\_`, `\#`, `\\`).
//!
//! # Example
//!
//! ```
//! let html = undermark::markdown_to_html("# __a _b_ c__\n\nText, _emphasised_.");
//! assert_eq!(
//!     html,
//!     "<h1><strong>a <em>b</em> c</strong></h1>\n<p>Text, <em>emphasised</em>.</p>"
//! );
//! ```

use log::debug;
use std::io::Write;

pub use undermark_config::Config;
pub use undermark_core::{Block, BlockKind, Node, Result, UndermarkError};
pub use undermark_parser::{parse_blocks, parse_inline, segment, Schedule};
pub use undermark_render::{render_block, render_blocks, HtmlRenderer};

/// Segments a document, parses every block and renders the result.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pick sequential or parallel parsing for a document of `block_count` blocks.
    pub fn schedule_for(&self, block_count: usize) -> Schedule {
        if self.config.features.use_parallel(block_count) {
            Schedule::Parallel
        } else {
            Schedule::Sequential
        }
    }

    /// Segment `text` and parse the inline nodes of every block.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let mut blocks = segment(text);
        let schedule = self.schedule_for(blocks.len());
        debug!("parsing {} blocks ({:?})", blocks.len(), schedule);
        parse_blocks(&mut blocks, schedule);
        blocks
    }

    /// Convert `text` to an HTML fragment.
    pub fn run(&self, text: &str) -> String {
        self.parse(text)
            .iter()
            .map(render_block)
            .collect::<Vec<_>>()
            .join(self.config.output.block_separator.as_str())
    }

    /// Render already parsed blocks into `writer` and return the block count.
    pub fn render_to<W: Write>(&self, blocks: &[Block], writer: W) -> Result<usize> {
        let mut renderer =
            HtmlRenderer::with_separator(writer, self.config.output.block_separator.as_str());
        renderer.render_all(blocks)?;
        let written = renderer.blocks_written();
        renderer.into_inner()?;
        Ok(written)
    }

    /// Convert `text` and write the HTML into `writer`.
    pub fn write_to<W: Write>(&self, text: &str, writer: W) -> Result<usize> {
        let blocks = self.parse(text);
        self.render_to(&blocks, writer)
    }
}

/// Convert a document to HTML with the default configuration.
pub fn markdown_to_html(text: &str) -> String {
    Pipeline::default().run(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html_heading() {
        assert_eq!(markdown_to_html("# Заголовок"), "<h1>Заголовок</h1>");
    }

    #[test]
    fn test_schedule_follows_config() {
        let mut config = Config::default();
        config.features.parallel = true;
        config.features.parallel_threshold = 3;
        let pipeline = Pipeline::new(config);
        assert_eq!(pipeline.schedule_for(2), Schedule::Sequential);
        assert_eq!(pipeline.schedule_for(3), Schedule::Parallel);

        assert_eq!(Pipeline::default().schedule_for(10_000), Schedule::Sequential);
    }

    #[test]
    fn test_custom_separator() {
        let mut config = Config::default();
        config.output.block_separator = "\n\n".into();
        let html = Pipeline::new(config).run("a\n\nb");
        assert_eq!(html, "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_write_to_counts_blocks() {
        let mut out = Vec::new();
        let written = Pipeline::default().write_to("a\n\n# b\n\nc", &mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "<p>a</p>\n<h1>b</h1>\n<p>c</p>");
    }
}
