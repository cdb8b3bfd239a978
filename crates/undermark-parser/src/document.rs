//! Whole-document parsing: segment into blocks, then parse each block.
//!
//! Blocks share no state, so they can be parsed on the rayon pool. Block
//! order is preserved either way.

use crate::block::segment;
use crate::inline::InlineParser;
use log::debug;
use rayon::prelude::*;
use undermark_core::Block;

/// How blocks are scheduled during parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schedule {
    /// One block after another on the calling thread
    #[default]
    Sequential,
    /// Blocks spread over the rayon thread pool
    Parallel,
}

/// Fill in the inline nodes of every block.
pub fn parse_blocks(blocks: &mut [Block], schedule: Schedule) {
    let parser = InlineParser::new();
    match schedule {
        Schedule::Sequential => blocks.iter_mut().for_each(|block| parser.parse_block(block)),
        Schedule::Parallel => blocks
            .par_iter_mut()
            .for_each(|block| parser.parse_block(block)),
    }
}

/// Segment `text` and parse every block.
pub fn parse_document(text: &str, schedule: Schedule) -> Vec<Block> {
    let mut blocks = segment(text);
    debug!("segmented {} bytes into {} blocks ({:?})", text.len(), blocks.len(), schedule);
    parse_blocks(&mut blocks, schedule);
    blocks
}
