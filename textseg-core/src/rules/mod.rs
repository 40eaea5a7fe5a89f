//! Rule sets, one per segmentation algorithm
//!
//! Each rule set keeps only the look-back it needs, decides whether a
//! boundary falls before the next code point, and then consumes it.

mod grapheme;
mod line;
mod sentence;
mod word;

pub(crate) use grapheme::GraphemeRules;
pub(crate) use line::LineRules;
pub(crate) use sentence::SentenceRules;
pub(crate) use word::WordRules;
