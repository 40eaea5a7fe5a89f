//! Incremental segmentation of byte streams
//!
//! [`StreamSegmenter`] accepts input in arbitrary pieces, including pieces
//! that split a UTF-8 sequence, and reports a boundary only once more input
//! can no longer change it. Its output is identical to segmenting the
//! concatenated input in one go.

use crate::error::Result;
use crate::output::Boundary;
use std::io::{ErrorKind, Read};
use textseg_core::{code_points, step_partial, Progress, State};

/// Held-back input up to this size is retried on every feed
const EAGER_RETRY_LIMIT: usize = 256;

/// Incremental segmenter over a byte stream
///
/// Some decisions need an unbounded look-ahead: after `"A. "` the sentence
/// rules read on until the next letter. Each attempt rescans the held-back
/// input from its start, so once it grows past a small limit the segmenter
/// waits until it has doubled before trying again. Total work stays linear
/// in the length of the stream.
#[derive(Debug, Clone, Default)]
pub struct StreamSegmenter {
    /// Bytes not yet settled into a cluster
    buffer: Vec<u8>,
    state: State,
    /// Offsets of `buffer[0]` in the stream
    byte_offset: usize,
    char_offset: usize,
    /// Buffer length at which an undecided tail is tried again
    retry_at: usize,
    /// Bytes examined by attempts that had to wait for more input
    #[cfg(test)]
    rescanned: usize,
}

impl StreamSegmenter {
    /// Create a segmenter at the start of a stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a raw state saved with [`StreamSegmenter::state`]
    ///
    /// Offsets restart at zero.
    pub fn with_state(raw: i64) -> Result<Self> {
        Ok(Self {
            state: State::from_raw(raw)?,
            ..Self::default()
        })
    }

    /// State after the last reported boundary
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of bytes held back waiting for more input
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Byte offset of the last reported boundary
    pub fn position(&self) -> usize {
        self.byte_offset
    }

    /// Append a piece of input and report the boundaries it settles
    ///
    /// A boundary held back behind a long undecided tail may be reported by
    /// a later call, at the latest by [`finish`](Self::finish). Returns the
    /// number of boundaries reported.
    pub fn feed<F: FnMut(Boundary)>(&mut self, chunk: &[u8], emit: F) -> usize {
        self.buffer.extend_from_slice(chunk);
        if self.buffer.len() < self.retry_at {
            return 0;
        }
        let emitted = self.drain(false, emit);
        if emitted == 0 && !chunk.is_empty() {
            tracing::trace!(buffered = self.buffer.len(), "waiting for more input");
        }
        emitted
    }

    /// End the stream and report the remaining boundaries
    pub fn finish<F: FnMut(Boundary)>(mut self, emit: F) -> usize {
        self.drain(true, emit)
    }

    fn drain<F: FnMut(Boundary)>(&mut self, at_end: bool, mut emit: F) -> usize {
        let mut pos = 0;
        let mut emitted = 0;
        while let Progress::Cluster(s) = step_partial(&self.buffer[pos..], self.state, at_end) {
            pos += s.segment.len();
            self.char_offset += code_points(s.segment).count();
            emit(Boundary::new(
                self.byte_offset + pos,
                self.char_offset,
                s.boundaries,
            ));
            self.state = s.state;
            emitted += 1;
        }
        #[cfg(test)]
        if !at_end {
            self.rescanned += self.buffer.len() - pos;
        }
        self.buffer.drain(..pos);
        self.byte_offset += pos;

        let pending = self.buffer.len();
        self.retry_at = if at_end || pending < EAGER_RETRY_LIMIT {
            0
        } else {
            pending.saturating_mul(2)
        };
        emitted
    }
}

/// Emit function that pushes to a vector
pub fn emit_push(boundaries: &mut Vec<Boundary>) -> impl FnMut(Boundary) + '_ {
    move |boundary| boundaries.push(boundary)
}

/// Segment everything `reader` yields, reporting boundaries as they settle
///
/// Reads `buffer_size` bytes at a time. Returns the number of bytes read.
pub fn for_each_boundary<R, F>(mut reader: R, buffer_size: usize, mut emit: F) -> Result<usize>
where
    R: Read,
    F: FnMut(Boundary),
{
    let mut segmenter = StreamSegmenter::new();
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total = 0;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        total += n;
        segmenter.feed(&buffer[..n], &mut emit);
    }

    segmenter.finish(&mut emit);
    tracing::debug!(bytes = total, "stream finished");
    Ok(total)
}

/// Segment everything `reader` yields and collect the boundaries
pub fn segment_reader<R: Read>(reader: R, buffer_size: usize) -> Result<Vec<Boundary>> {
    let mut boundaries = Vec::new();
    for_each_boundary(reader, buffer_size, emit_push(&mut boundaries))?;
    Ok(boundaries)
}
