//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which controls how the
//! document pipeline schedules its work.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Parse blocks on the rayon thread pool.
    /// Default: false
    #[serde(default)]
    pub parallel: bool,

    /// Minimum number of blocks before parallel parsing kicks in.
    /// Default: 64
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML doesn't distinguish "not set" from "set to default", so every
    /// field is copied from `other`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.parallel = other.parallel;
        self.parallel_threshold = other.parallel_threshold;
    }

    /// Whether a document with `block_count` blocks should be parsed in parallel.
    pub fn use_parallel(&self, block_count: usize) -> bool {
        self.parallel && block_count >= self.parallel_threshold
    }
}

fn default_parallel_threshold() -> usize {
    64
}
