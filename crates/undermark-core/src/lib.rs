//! Undermark Core
//!
//! This crate provides the data model and error definitions shared by
//! the undermark parser, renderer and command-line tool.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Node`] - A single inline node (plain text, emphasis or strong)
//! - [`Block`], [`BlockKind`] - Block-level units produced by the segmenter
//! - [`UndermarkError`] - Error types for the outer I/O and config surfaces

pub mod block;
pub mod error;
pub mod node;

pub use block::{Block, BlockKind};
pub use error::{Result, UndermarkError};
pub use node::Node;
