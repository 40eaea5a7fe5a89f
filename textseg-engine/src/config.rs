//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bytes per core below which parallel execution does not pay off
pub const DEFAULT_ADAPTIVE_THRESHOLD: usize = 128 * 1024;

/// Chunking policy for parallel execution
///
/// Chunk sizes are targets: every chunk is extended to end right after a
/// line feed, so chunks are usually a little longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChunkPolicy {
    /// Fixed chunk size in bytes
    Fixed {
        /// Size of each chunk in bytes
        size: usize,
    },
    /// Split evenly into chunks of about `target_bytes`
    Auto {
        /// Target size for each chunk in bytes
        target_bytes: usize,
    },
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Auto {
            target_bytes: 256 * 1024,
        }
    }
}

/// Engine configuration
///
/// Loadable from TOML; every field is optional there:
///
/// ```toml
/// execution_mode = "parallel"
/// threads = 4
///
/// [chunk_policy]
/// kind = "fixed"
/// size = 1048576
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Chunk sizing policy
    pub chunk_policy: ChunkPolicy,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum input size for parallel processing
    pub parallel_threshold: usize,
    /// Adaptive threshold in bytes per core (None = 128KB)
    pub adaptive_threshold: Option<usize>,
    /// Read size of the streaming executor
    pub stream_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            chunk_policy: ChunkPolicy::default(),
            threads: None,
            parallel_threshold: 100_000, // 100KB
            adaptive_threshold: None,
            stream_window: 64 * 1024,
        }
    }
}

impl EngineConfig {
    /// Create a streaming configuration
    pub fn streaming() -> Self {
        Self {
            execution_mode: ExecutionMode::Streaming,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Create a fast configuration optimized for throughput
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            chunk_policy: ChunkPolicy::Fixed { size: 512 * 1024 },
            threads: None,
            parallel_threshold: 50_000,
            adaptive_threshold: Some(256 * 1024),
            stream_window: 256 * 1024,
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Start a builder from the defaults
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Bytes per core below which adaptive mode stays sequential
    pub fn adaptive_threshold_or_default(&self) -> usize {
        self.adaptive_threshold.unwrap_or(DEFAULT_ADAPTIVE_THRESHOLD)
    }

    /// Check the configuration for values the executors cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        match self.chunk_policy {
            ChunkPolicy::Fixed { size: 0 } | ChunkPolicy::Auto { target_bytes: 0 } => {
                return Err(EngineError::ConfigError(
                    "chunk size must be at least 1 byte".to_string(),
                ));
            }
            _ => {}
        }
        if self.adaptive_threshold == Some(0) {
            return Err(EngineError::ConfigError(
                "adaptive threshold must be at least 1 byte".to_string(),
            ));
        }
        if self.stream_window == 0 {
            return Err(EngineError::ConfigError(
                "stream window must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the chunk policy
    pub fn chunk_policy(mut self, policy: ChunkPolicy) -> Self {
        self.config.chunk_policy = policy;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the minimum input size for parallel processing
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Set the adaptive threshold in bytes per core
    pub fn adaptive_threshold(mut self, bytes: usize) -> Self {
        self.config.adaptive_threshold = Some(bytes);
        self
    }

    /// Set the streaming read size
    pub fn stream_window(mut self, bytes: usize) -> Self {
        self.config.stream_window = bytes;
        self
    }

    /// Use streaming preset
    pub fn streaming(mut self) -> Self {
        self.config = EngineConfig::streaming();
        self
    }

    /// Use fast preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Use balanced preset
    pub fn balanced(mut self) -> Self {
        self.config = EngineConfig::balanced();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            EngineConfig::default(),
            EngineConfig::streaming(),
            EngineConfig::fast(),
            EngineConfig::balanced(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
        assert_eq!(EngineConfig::streaming().execution_mode, ExecutionMode::Streaming);
    }

    #[test]
    fn test_builder_validates() {
        let err = EngineConfig::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));

        let err = EngineConfig::builder()
            .chunk_policy(ChunkPolicy::Fixed { size: 0 })
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));

        let config = EngineConfig::builder()
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .stream_window(16)
            .build()
            .unwrap();
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.stream_window, 16);
    }

    #[test]
    fn test_from_toml_str() {
        let config = EngineConfig::from_toml_str(
            r#"
            execution_mode = "parallel"
            threads = 4

            [chunk_policy]
            kind = "fixed"
            size = 4096
            "#,
        )
        .unwrap();
        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert_eq!(config.threads, Some(4));
        assert_eq!(config.chunk_policy, ChunkPolicy::Fixed { size: 4096 });
        assert_eq!(config.stream_window, EngineConfig::default().stream_window);
    }

    #[test]
    fn test_from_toml_str_errors() {
        let err = EngineConfig::from_toml_str("execution_mode = \"warp\"").unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));

        let err = EngineConfig::from_toml_str("stream_window = 0").unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }
}
