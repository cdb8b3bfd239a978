//! Output layout configuration.

use serde::{Deserialize, Serialize};

/// Controls how rendered blocks are laid out in the HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Text written between two rendered blocks.
    /// Default: a single line feed
    #[serde(default = "default_block_separator")]
    pub block_separator: String,

    /// Terminate the written document with a line feed.
    /// Default: true
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            block_separator: default_block_separator(),
            trailing_newline: true,
        }
    }
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.block_separator = other.block_separator.clone();
        self.trailing_newline = other.trailing_newline;
    }
}

fn default_block_separator() -> String {
    "\n".to_string()
}

fn default_true() -> bool {
    true
}
