//! Segmenter facade

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    config::EngineConfig,
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode},
    input::Input,
    output::{Output, ProcessingMetadata},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main entry point: segments any [`Input`] and reports every boundary
///
/// Cheap to clone; clones share the configured executors.
///
/// # Example
///
/// ```rust
/// use textseg_engine::{Input, Segmenter, Unit};
///
/// let segmenter = Segmenter::new();
/// let output = segmenter.process(Input::from_text("Hello, world!")).unwrap();
/// assert_eq!(output.offsets(Unit::Word), vec![5, 6, 7, 12, 13]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    dispatcher: Arc<AdaptiveDispatcher>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(AdaptiveDispatcher::new(EngineConfig::default())),
        }
    }

    /// Create a segmenter with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dispatcher: Arc::new(AdaptiveDispatcher::new(config)),
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Process input with the configured execution mode
    pub fn process(&self, input: Input) -> Result<Output> {
        self.process_with_mode(input, self.config().execution_mode)
    }

    /// Process input with a specific execution mode
    pub fn process_with_mode(&self, input: Input, mode: ExecutionMode) -> Result<Output> {
        let start_time = Instant::now();
        let output = self.dispatcher.dispatch(input, mode)?;
        let metadata = metadata(output.metrics, start_time.elapsed());

        tracing::debug!(
            mode = ?metadata.execution_mode,
            bytes = metadata.bytes_processed,
            boundaries = output.boundaries.len(),
            elapsed_ms = metadata.processing_time_ms,
            "segmentation finished"
        );

        Ok(Output {
            boundaries: output.boundaries,
            metadata,
        })
    }

    /// Process a string directly
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }
}

fn metadata(metrics: ExecutionMetrics, elapsed: Duration) -> ProcessingMetadata {
    let secs = elapsed.as_secs_f64();
    ProcessingMetadata {
        execution_mode: metrics.mode_used,
        processing_time_ms: secs * 1000.0,
        bytes_processed: metrics.bytes_processed,
        chunks_processed: (metrics.mode_used == ExecutionMode::Parallel)
            .then_some(metrics.chunks_processed),
        thread_count: metrics.thread_count,
        bytes_per_second: if secs > 0.0 {
            metrics.bytes_processed as f64 / secs
        } else {
            0.0
        },
    }
}
