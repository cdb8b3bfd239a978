//! Undermark Parser
//!
//! Parser for a small markdown dialect: `# ` headings, paragraphs separated
//! by blank lines, `_emphasis_`, `__strong__` and backslash escapes.
//!
//! # Overview
//!
//! - [`segment`] splits a document into heading and paragraph blocks
//! - [`parse_inline`] resolves the underscores of one block into [`Node`]s
//! - [`parse_document`] does both, optionally in parallel
//!
//! # Example
//!
//! ```
//! use undermark_core::Node;
//! use undermark_parser::parse_inline;
//!
//! let nodes = parse_inline("__a _b_ c__");
//! assert_eq!(
//!     nodes,
//!     vec![
//!         Node::Strong("a ".into()),
//!         Node::Emphasis("b".into()),
//!         Node::Strong(" c".into()),
//!     ]
//! );
//! ```
//!
//! [`Node`]: undermark_core::Node

pub mod assemble;
pub mod block;
pub mod delimiter;
pub mod document;
pub mod escape;
pub mod inline;
pub mod marker;

pub use block::{classify, segment, HEADING_PREFIX};
pub use document::{parse_blocks, parse_document, Schedule};
pub use inline::{parse_inline, InlineParser};
