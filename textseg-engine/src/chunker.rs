//! Text chunking at restart points
//!
//! After a line feed every algorithm has a mandatory boundary and carries no
//! context forward, so a chunk that starts right after one can be segmented
//! from `State::START` and still agree with a whole-text run.

use crate::{
    config::ChunkPolicy,
    error::{EngineError, Result},
};

const LINE_FEED: u8 = b'\n';

/// A chunk of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// The chunk's bytes
    pub bytes: &'a [u8],
    /// Byte offset in the original input
    pub start: usize,
}

impl TextChunk<'_> {
    /// Byte offset just past the chunk
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }
}

/// Splits input into chunks that each end right after a line feed
#[derive(Debug)]
pub struct ChunkManager {
    policy: ChunkPolicy,
}

impl ChunkManager {
    /// Create a new chunk manager
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    /// Chunk text according to the policy
    ///
    /// Every chunk except the last ends with a line feed. Input without line
    /// feeds comes back as a single chunk.
    pub fn chunk_text<'a>(&self, text: &'a [u8]) -> Result<Vec<TextChunk<'a>>> {
        match self.policy {
            ChunkPolicy::Fixed { size } => chunk_fixed(text, size),
            ChunkPolicy::Auto { target_bytes } => chunk_auto(text, target_bytes),
        }
    }
}

/// Fixed-size chunking
fn chunk_fixed(text: &[u8], chunk_size: usize) -> Result<Vec<TextChunk<'_>>> {
    if chunk_size == 0 {
        return Err(EngineError::InvalidChunkBoundary { position: 0 });
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let target = (start + chunk_size).min(text.len());
        // Extend to the first line feed at or after the target end
        let end = text[target - 1..]
            .iter()
            .position(|&b| b == LINE_FEED)
            .map_or(text.len(), |i| target + i);

        if end <= start {
            return Err(EngineError::InvalidChunkBoundary { position: start });
        }

        chunks.push(TextChunk {
            bytes: &text[start..end],
            start,
        });
        start = end;
    }

    Ok(chunks)
}

/// Auto-sizing based on target size
fn chunk_auto(text: &[u8], target_bytes: usize) -> Result<Vec<TextChunk<'_>>> {
    let total_bytes = text.len();
    let chunk_count = total_bytes.div_ceil(target_bytes.max(1)).max(1);
    let chunk_size = total_bytes / chunk_count;

    chunk_fixed(text, chunk_size.max(1))
}

/// Running totals, starting with `identity`
pub fn prefix_sum<T, F>(values: &[T], identity: T, combine: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    let mut result = Vec::with_capacity(values.len() + 1);
    result.push(identity.clone());

    let mut acc = identity;
    for value in values {
        acc = combine(&acc, value);
        result.push(acc.clone());
    }

    result
}
