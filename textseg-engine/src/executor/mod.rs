//! Execution strategies for text processing

use crate::config::EngineConfig;
use crate::error::Result;
use crate::output::Boundary;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;
pub mod streaming;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;
pub use streaming::StreamingExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Single-threaded, whole input in memory
    Sequential,
    /// Line-feed-aligned chunks on a rayon pool
    Parallel,
    /// Fixed-size reads through a stream segmenter
    Streaming,
    /// Pick one of the above from the input size
    #[default]
    Adaptive,
}

/// What an executor did besides finding boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetrics {
    /// Mode that actually ran
    pub mode_used: ExecutionMode,
    /// Bytes segmented
    pub bytes_processed: usize,
    /// Chunks segmented independently
    pub chunks_processed: usize,
    /// Worker threads used
    pub thread_count: usize,
}

/// Boundaries plus execution metrics
#[derive(Debug, Clone)]
pub struct ProcessingOutput {
    /// One record per grapheme cluster
    pub boundaries: Vec<Boundary>,
    /// Execution metrics
    pub metrics: ExecutionMetrics,
}

/// Pluggable execution strategy
pub trait Executor: Send + Sync {
    /// Segment `text`, reporting every grapheme cluster boundary
    fn process(&self, text: &[u8]) -> Result<ProcessingOutput>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Select sequential or parallel execution for an input of `text_len` bytes
///
/// Parallel execution is chosen only when the input reaches the
/// configured threshold and every worker gets at least the adaptive
/// threshold's worth of bytes.
pub fn auto_select(text_len: usize, config: &EngineConfig) -> ExecutionMode {
    let threads = config.threads.unwrap_or_else(num_cpus::get).max(1);
    let bytes_per_core = text_len / threads;

    if threads == 1
        || text_len < config.parallel_threshold
        || bytes_per_core < config.adaptive_threshold_or_default()
    {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select_small_input() {
        let config = EngineConfig::default();
        assert_eq!(auto_select(0, &config), ExecutionMode::Sequential);
        assert_eq!(auto_select(1024, &config), ExecutionMode::Sequential);
    }

    #[test]
    fn test_auto_select_single_thread() {
        let config = EngineConfig {
            threads: Some(1),
            parallel_threshold: 0,
            ..EngineConfig::default()
        };
        assert_eq!(auto_select(usize::MAX / 2, &config), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_large_input() {
        let config = EngineConfig {
            threads: Some(4),
            parallel_threshold: 1024,
            adaptive_threshold: Some(1024),
            ..EngineConfig::default()
        };
        assert_eq!(auto_select(4096, &config), ExecutionMode::Parallel);
        assert_eq!(auto_select(4095, &config), ExecutionMode::Sequential);
    }
}
