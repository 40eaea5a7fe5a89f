//! Orchestration for textseg segmentation
//!
//! This crate runs the single-pass engine from `textseg-core` over whole
//! inputs: files, byte buffers and readers, sequentially, in parallel over
//! line-feed-aligned chunks, or streamed in fixed-size reads. Every mode
//! reports the same boundaries.
//!
//! # Example
//!
//! ```rust
//! use textseg_engine::{EngineConfig, ExecutionMode, Input, Segmenter, Unit};
//!
//! let config = EngineConfig::builder()
//!     .execution_mode(ExecutionMode::Streaming)
//!     .stream_window(4)
//!     .build()
//!     .unwrap();
//! let segmenter = Segmenter::with_config(config).unwrap();
//! let output = segmenter.process(Input::from_text("One. Two.")).unwrap();
//! assert_eq!(output.offsets(Unit::Sentence), vec![5, 9]);
//! ```

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod output;
pub mod processor;
pub mod stream;

// Re-export key types
pub use adaptive_dispatcher::AdaptiveDispatcher;
pub use chunker::{ChunkManager, TextChunk};
pub use config::{ChunkPolicy, EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{auto_select, ExecutionMetrics, ExecutionMode, Executor, ProcessingOutput};
pub use input::Input;
pub use output::{Boundary, Output, ProcessingMetadata};
pub use processor::Segmenter;
pub use stream::{emit_push, for_each_boundary, segment_reader, StreamSegmenter};

// Re-export from core for convenience
pub use textseg_core::{Boundaries, LineBreak, State, Unit};
