//! Boundary records and processing results

use crate::executor::ExecutionMode;
use serde::{Deserialize, Serialize};
use textseg_core::{Boundaries, LineBreak, Unit};

/// The boundary after one grapheme cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Byte offset of the boundary in the input
    pub byte_offset: usize,
    /// Code point offset of the boundary (each malformed sequence counts once)
    pub char_offset: usize,
    /// A word ends here
    pub word: bool,
    /// A sentence ends here
    pub sentence: bool,
    /// Line break verdict
    pub line: LineBreak,
}

impl Boundary {
    /// Build a record from an engine mask
    pub fn new(byte_offset: usize, char_offset: usize, boundaries: Boundaries) -> Self {
        Self {
            byte_offset,
            char_offset,
            word: boundaries.is_word(),
            sentence: boundaries.is_sentence(),
            line: boundaries.line(),
        }
    }

    /// The engine mask this record was built from
    pub fn boundaries(&self) -> Boundaries {
        Boundaries::new(self.line, self.word, self.sentence)
    }

    pub(crate) fn shifted(self, bytes: usize, chars: usize) -> Self {
        Self {
            byte_offset: self.byte_offset + bytes,
            char_offset: self.char_offset + chars,
            ..self
        }
    }
}

/// Rich output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// One record per grapheme cluster, in input order
    pub boundaries: Vec<Boundary>,
    /// Processing metadata and performance metrics
    pub metadata: ProcessingMetadata,
}

impl Output {
    /// Byte offsets of the boundaries that end a segment of `unit`
    pub fn offsets(&self, unit: Unit) -> Vec<usize> {
        self.boundaries
            .iter()
            .filter(|b| unit.is_boundary(b.boundaries()))
            .map(|b| b.byte_offset)
            .collect()
    }

    /// Split `text` (the processed input) into segments of `unit`
    pub fn segments<'t>(&self, text: &'t [u8], unit: Unit) -> Vec<&'t [u8]> {
        let mut start = 0;
        let mut out = Vec::new();
        for end in self.offsets(unit) {
            if let Some(segment) = text.get(start..end) {
                out.push(segment);
            }
            start = end;
        }
        out
    }
}

/// Processing metadata
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Number of chunks processed (parallel runs only)
    pub chunks_processed: Option<usize>,
    /// Worker threads used
    pub thread_count: usize,
    /// Throughput in bytes per second
    pub bytes_per_second: f64,
}
