//! Parallel execution strategy

use crate::{
    chunker::{prefix_sum, ChunkManager, TextChunk},
    config::ChunkPolicy,
    error::{EngineError, Result},
    executor::{sequential::scan, ExecutionMetrics, ExecutionMode, Executor, ProcessingOutput},
    output::Boundary,
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Chunks end right after a line feed, where every algorithm restarts, so
/// each chunk is segmented independently from the start state and the
/// results are stitched together by shifting offsets.
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_manager: ChunkManager,
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// `threads = None` runs on rayon's global pool.
    pub fn new(chunk_policy: ChunkPolicy, threads: Option<usize>) -> Self {
        Self {
            chunk_manager: ChunkManager::new(chunk_policy),
            threads,
        }
    }

    fn scan_chunks(&self, chunks: &[TextChunk<'_>]) -> Result<Vec<Vec<Boundary>>> {
        let run = || -> Vec<Vec<Boundary>> {
            chunks.par_iter().map(|chunk| scan(chunk.bytes)).collect()
        };

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}

impl Executor for ParallelExecutor {
    fn process(&self, text: &[u8]) -> Result<ProcessingOutput> {
        // Phase 1: Chunk the text
        let chunks = self.chunk_manager.chunk_text(text)?;
        let thread_count = self.threads.unwrap_or_else(rayon::current_num_threads);
        tracing::debug!(
            chunks = chunks.len(),
            bytes = text.len(),
            threads = thread_count,
            "parallel chunk plan"
        );

        // Phase 2: Scan chunks in parallel
        let per_chunk = if chunks.len() > 1 {
            self.scan_chunks(&chunks)?
        } else {
            chunks.iter().map(|chunk| scan(chunk.bytes)).collect()
        };

        // Phase 3: Offsets of each chunk in code points
        let char_counts: Vec<usize> = per_chunk
            .iter()
            .map(|b| b.last().map_or(0, |last| last.char_offset))
            .collect();
        let char_starts = prefix_sum(&char_counts, 0, |a, b| a + b);

        // Phase 4: Stitch
        let mut boundaries = Vec::with_capacity(per_chunk.iter().map(Vec::len).sum());
        for ((chunk, found), &char_start) in chunks.iter().zip(per_chunk).zip(&char_starts) {
            if found.last().map(|b| b.byte_offset) != Some(chunk.bytes.len()) {
                return Err(EngineError::InvalidChunkBoundary {
                    position: chunk.end(),
                });
            }
            boundaries.extend(
                found
                    .into_iter()
                    .map(|b| b.shifted(chunk.start, char_start)),
            );
        }

        Ok(ProcessingOutput {
            boundaries,
            metrics: ExecutionMetrics {
                mode_used: ExecutionMode::Parallel,
                bytes_processed: text.len(),
                chunks_processed: chunks.len(),
                thread_count,
            },
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "First line. Still first.\n\
                    \u{00C9}t\u{00E9} \u{1F1EB}\u{1F1F7}!\r\n\
                    \n\
                    \u{65E5}\u{672C}\u{8A9E}\u{3002}\u{300C}\u{5F15}\u{7528}\u{300D}\n\
                    tail without newline"
            .repeat(8);
        let expected = SequentialExecutor.process(text.as_bytes()).unwrap();

        for size in [1, 5, 40, 1000] {
            let executor = ParallelExecutor::new(ChunkPolicy::Fixed { size }, Some(2));
            let output = executor.process(text.as_bytes()).unwrap();
            assert_eq!(output.boundaries, expected.boundaries, "chunk size {size}");
            assert!(output.metrics.chunks_processed >= 1);
        }
    }

    #[test]
    fn test_parallel_on_global_pool() {
        let text = "a\nb\nc\n".repeat(50);
        let executor = ParallelExecutor::new(ChunkPolicy::Fixed { size: 6 }, None);
        let output = executor.process(text.as_bytes()).unwrap();
        assert_eq!(output.boundaries.len(), 300);
        assert_eq!(output.metrics.chunks_processed, 50);
        assert_eq!(output.boundaries.last().map(|b| b.char_offset), Some(300));
    }

    #[test]
    fn test_empty_input() {
        let executor = ParallelExecutor::new(ChunkPolicy::default(), Some(2));
        let output = executor.process(b"").unwrap();
        assert!(output.boundaries.is_empty());
        assert_eq!(output.metrics.chunks_processed, 0);
    }
}
