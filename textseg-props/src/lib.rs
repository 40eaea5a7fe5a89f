//! Unicode break-property classification
//!
//! This crate maps a code point to the four break properties the
//! segmentation rules consume (Grapheme_Cluster_Break, Word_Break,
//! Sentence_Break, Line_Break) plus the auxiliary properties some rules
//! inspect (Extended_Pictographic, Indic_Conjunct_Break, East_Asian_Width,
//! General_Category = Cn).
//!
//! The data comes from `icu_properties` compiled tables and is read-only;
//! every lookup is O(1) and needs no synchronization.
//!
//! # Example
//!
//! ```rust
//! use textseg_props::{classify, GraphemeClass, LineClass};
//!
//! let c = classify('\n');
//! assert_eq!(c.grapheme, GraphemeClass::LF);
//! assert_eq!(c.line, LineClass::LF);
//! ```

#![warn(missing_docs)]

pub mod class;
pub mod classify;
pub mod tables;

pub use class::{
    EastAsianWidth, GraphemeClass, IndicConjunct, LineClass, SentenceClass, WordClass,
};
pub use classify::{classify, Classification};
pub use tables::{UnicodeVersion, UNICODE_VERSION};
