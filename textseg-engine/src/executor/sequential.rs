//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode, Executor, ProcessingOutput},
    output::Boundary,
};
use textseg_core::{code_points, step, State};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process(&self, text: &[u8]) -> Result<ProcessingOutput> {
        Ok(ProcessingOutput {
            boundaries: scan(text),
            metrics: ExecutionMetrics {
                mode_used: ExecutionMode::Sequential,
                bytes_processed: text.len(),
                chunks_processed: 1,
                thread_count: 1,
            },
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

/// Segment a whole text from the start state
pub(crate) fn scan(text: &[u8]) -> Vec<Boundary> {
    let mut boundaries = Vec::new();
    let mut rest = text;
    let mut state = State::START;
    let mut byte_offset = 0;
    let mut char_offset = 0;

    while let Some(s) = step(rest, state) {
        byte_offset += s.segment.len();
        char_offset += code_points(s.segment).count();
        boundaries.push(Boundary::new(byte_offset, char_offset, s.boundaries));
        rest = s.rest;
        state = s.state;
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::LineBreak;

    #[test]
    fn test_sequential_records() {
        let output = SequentialExecutor.process("Hi!\n\u{00E9}".as_bytes()).unwrap();
        let offsets: Vec<(usize, usize)> = output
            .boundaries
            .iter()
            .map(|b| (b.byte_offset, b.char_offset))
            .collect();
        assert_eq!(offsets, vec![(1, 1), (2, 2), (3, 3), (4, 4), (6, 5)]);
        assert_eq!(output.boundaries[3].line, LineBreak::MustBreak);
        assert!(output.boundaries[3].sentence);
        assert_eq!(output.metrics.bytes_processed, 6);
    }
}
