//! Incremental Unicode text segmentation
//!
//! This crate finds the boundaries of extended grapheme clusters, words and
//! sentences (UAX #29) and the line break opportunities (UAX #14) of a text,
//! all four in a single forward pass.
//!
//! # Architecture
//!
//! - **Engine**: [`step`] consumes one grapheme cluster and returns a
//!   [`Boundaries`] mask classifying the boundary after it for every
//!   algorithm, plus an opaque [`State`] to continue from. Text can be fed
//!   in arbitrary pieces without changing the result.
//!   [`step_partial`] does the same for a prefix of a longer input.
//! - **Extractors**: [`first_word`], [`first_sentence`],
//!   [`first_line_segment`] and [`first_grapheme_cluster`] split one segment
//!   off the front of a text; [`words`], [`sentences`] and [`line_segments`]
//!   iterate.
//! - **Cursor**: [`Graphemes`] walks clusters with per-boundary metadata.
//! - **Counters**: [`grapheme_cluster_count`], [`word_count`],
//!   [`sentence_count`].
//!
//! Every operation accepts `str`, UTF-8 bytes (malformed sequences read as
//! U+FFFD) and slices of `char`.
//!
//! # Example
//!
//! ```rust
//! use textseg_core::{step, State};
//!
//! let mut text = "Hello, world!";
//! let mut state = State::START;
//! let mut marked = String::new();
//! while let Some(s) = step(text, state) {
//!     marked.push_str(s.segment);
//!     if s.boundaries.is_word() {
//!         marked.push('|');
//!     }
//!     text = s.rest;
//!     state = s.state;
//! }
//! assert_eq!(marked, "Hello|,| |world|!|");
//! ```

#![warn(missing_docs)]

pub mod boundaries;
pub mod count;
pub mod cursor;
pub mod error;
pub mod extract;
mod rules;
pub mod state;
pub mod step;
pub mod text;

pub use boundaries::{Boundaries, LineBreak};
pub use count::{
    grapheme_cluster_count, has_trailing_line_break, reverse_graphemes, sentence_count,
    word_count,
};
pub use cursor::Graphemes;
pub use error::{CoreError, Result};
pub use extract::{
    first_grapheme_cluster, first_line_segment, first_sentence, first_word, line_segments,
    segments, sentences, words, LineSegment, LineSegments, Segment, Segments, Unit,
};
pub use state::State;
pub use step::{step, step_partial, Progress, Step};
pub use text::{code_points, CodePoints, Text, REPLACEMENT_CHARACTER};

pub use textseg_props::{UnicodeVersion, UNICODE_VERSION};

/// Unicode version of the property data the engine was built with
///
/// See [`conformance`] for the revisions of the rules applied to it.
pub fn unicode_version() -> UnicodeVersion {
    UNICODE_VERSION
}

/// Unicode revisions the engine implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conformance {
    /// Property data
    pub data: UnicodeVersion,
    /// Grapheme, word and sentence rules (UAX #29)
    pub text_segmentation: UnicodeVersion,
    /// Line breaking rules (UAX #14)
    ///
    /// Line_Break values introduced after this revision are read as `XX`.
    pub line_breaking: UnicodeVersion,
}

/// Revisions of the data and of each rule set
pub const CONFORMANCE: Conformance = Conformance {
    data: UNICODE_VERSION,
    text_segmentation: UnicodeVersion::new(16, 0, 0),
    line_breaking: UnicodeVersion::new(15, 0, 0),
};

/// Revisions of the data and of each rule set
pub fn conformance() -> Conformance {
    CONFORMANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_version() {
        assert_eq!(unicode_version().major, 16);
    }

    #[test]
    fn test_conformance_reports_each_rule_set() {
        let c = conformance();
        assert_eq!(c.data, unicode_version());
        assert_eq!(c.text_segmentation.to_string(), "16.0.0");
        assert_eq!(c.line_breaking.to_string(), "15.0.0");
    }
}
