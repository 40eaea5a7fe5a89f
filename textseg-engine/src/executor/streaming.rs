//! Streaming execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode, Executor, ProcessingOutput},
    stream::{emit_push, for_each_boundary, StreamSegmenter},
};
use std::io::Read;

/// Streaming executor: reads one window at a time and keeps only undecided
/// input in memory
#[derive(Debug, Clone)]
pub struct StreamingExecutor {
    window_size: usize,
}

impl StreamingExecutor {
    /// Create a new streaming executor reading `window_size` bytes at a time
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
        }
    }

    /// Segment everything `reader` yields
    pub fn process_reader<R: Read>(&self, reader: R) -> Result<ProcessingOutput> {
        let mut boundaries = Vec::new();
        let bytes = for_each_boundary(reader, self.window_size, emit_push(&mut boundaries))?;
        Ok(ProcessingOutput {
            boundaries,
            metrics: self.metrics(bytes),
        })
    }

    fn metrics(&self, bytes_processed: usize) -> ExecutionMetrics {
        ExecutionMetrics {
            mode_used: ExecutionMode::Streaming,
            bytes_processed,
            chunks_processed: bytes_processed.div_ceil(self.window_size),
            thread_count: 1,
        }
    }
}

impl Executor for StreamingExecutor {
    fn process(&self, text: &[u8]) -> Result<ProcessingOutput> {
        let mut boundaries = Vec::new();
        let mut segmenter = StreamSegmenter::new();
        for window in text.chunks(self.window_size) {
            segmenter.feed(window, emit_push(&mut boundaries));
        }
        segmenter.finish(emit_push(&mut boundaries));

        Ok(ProcessingOutput {
            boundaries,
            metrics: self.metrics(text.len()),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Streaming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;

    #[test]
    fn test_streaming_matches_sequential() {
        let text = "A sentence. Another one!\n\u{1F44D}\u{1F3FC} \u{65E5}\u{672C}\u{3002}".as_bytes();
        let expected = SequentialExecutor.process(text).unwrap().boundaries;
        for window in [1, 2, 3, 7, 64] {
            let executor = StreamingExecutor::new(window);
            assert_eq!(executor.process(text).unwrap().boundaries, expected);
            assert_eq!(executor.process_reader(text).unwrap().boundaries, expected);
        }
    }

    #[test]
    fn test_zero_window_is_clamped() {
        let output = StreamingExecutor::new(0).process(b"ab").unwrap();
        assert_eq!(output.boundaries.len(), 2);
        assert_eq!(output.metrics.chunks_processed, 2);
    }
}
