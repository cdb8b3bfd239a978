//! Inline parser.
//!
//! Turns a block's raw text into a flat sequence of [`Node`]s in one
//! left-to-right pass:
//!
//! 1. backslash escapes are resolved ([`crate::escape`])
//! 2. non-delimiter characters are buffered as text
//! 3. every underscore run is cut into `__`/`_` tokens and handed to the
//!    [`MarkerProcessor`], which decides open/close/literal
//!
//! Malformed markup never fails; unmatched delimiters come back as text.

use crate::delimiter::{run_length, Marker};
use crate::escape::preprocess;
use crate::marker::MarkerProcessor;
use log::trace;
use undermark_core::{Block, Node};

/// Inline markdown parser.
///
/// The parser keeps no state between calls; the same input always produces
/// the same nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineParser;

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a block's text into inline nodes.
    pub fn parse(&self, text: &str) -> Vec<Node> {
        let input = preprocess(text);
        let mut processor = MarkerProcessor::new(&input);

        let mut i = 0;
        while i < input.len() {
            let current = input[i];
            if !current.is_delimiter() {
                processor.push_char(current.ch);
                i += 1;
                continue;
            }

            // A run of four is read as two strong tokens, a run of three as
            // strong then emphasis.
            let mut remaining = run_length(&input, i);
            while remaining > 0 {
                let used = processor.handle(Marker::for_run(remaining), i);
                i += used;
                remaining -= used;
            }
        }

        let nodes = processor.finish();
        trace!("parsed {} chars into {} inline nodes", input.len(), nodes.len());
        nodes
    }

    /// Parse a block's raw text and store the nodes on it.
    pub fn parse_block(&self, block: &mut Block) {
        let inlines = self.parse(block.raw_text());
        block.set_inlines(inlines);
    }
}

/// Parse inline markdown with a default parser.
///
/// # Example
///
/// ```
/// use undermark_core::Node;
/// use undermark_parser::parse_inline;
///
/// assert_eq!(
///     parse_inline("a _b_ c"),
///     vec![
///         Node::Text("a ".into()),
///         Node::Emphasis("b".into()),
///         Node::Text(" c".into()),
///     ]
/// );
/// ```
pub fn parse_inline(text: &str) -> Vec<Node> {
    InlineParser::new().parse(text)
}
