//! Pipeline orchestrator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for batch orchestration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Records per chunk. Default: 25. Zero is rejected by validation.
    pub chunk_size: Option<usize>,
    /// Process records in parallel. Default: true.
    pub parallel: Option<bool>,
}

impl PipelineConfig {
    /// Returns the effective chunk size, defaulting to 25.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(25)
    }

    /// Returns the effective parallelism flag, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
