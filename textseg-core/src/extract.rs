//! Extractors: split the first word, sentence or line segment off a text
//!
//! Each extractor drives the engine cluster by cluster until the boundary
//! it is interested in shows up, so all of them share one notion of state
//! and can be mixed freely on the same text.

use crate::boundaries::{Boundaries, LineBreak};
use crate::state::State;
use crate::step::{advance, Advance};
use crate::text::Text;

/// Segmentation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    /// Extended grapheme clusters
    Grapheme,
    /// Words (including punctuation and whitespace runs)
    Word,
    /// Sentences
    Sentence,
    /// Line segments, ending at optional or mandatory breaks
    Line,
}

impl Unit {
    /// Does a boundary with this mask end a segment of this unit?
    pub fn is_boundary(self, boundaries: Boundaries) -> bool {
        match self {
            Unit::Grapheme => true,
            Unit::Word => boundaries.is_word(),
            Unit::Sentence => boundaries.is_sentence(),
            Unit::Line => boundaries.line() != LineBreak::DontBreak,
        }
    }
}

/// A segment split off the front of a text
#[derive(Debug, PartialEq, Eq)]
pub struct Segment<'a, T: ?Sized> {
    /// The segment, never empty
    pub segment: &'a T,
    /// The text after it
    pub rest: &'a T,
    /// State to pass along with `rest`
    pub state: State,
}

/// A line segment split off the front of a text
#[derive(Debug, PartialEq, Eq)]
pub struct LineSegment<'a, T: ?Sized> {
    /// The segment, including trailing spaces and line terminators
    pub segment: &'a T,
    /// The text after it
    pub rest: &'a T,
    /// The line must end after this segment
    pub must_break: bool,
    /// State to pass along with `rest`
    pub state: State,
}

impl<T: ?Sized> Clone for Segment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Segment<'_, T> {}

impl<T: ?Sized> Clone for LineSegment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for LineSegment<'_, T> {}

/// Length of the first segment of `unit`
fn first_unit<T: Text + ?Sized>(text: &T, mut state: State, unit: Unit) -> Option<Advance> {
    if text.units() == 0 {
        return None;
    }
    let mut len = 0;
    loop {
        let (_, rest) = text.split_units(len);
        let advanced = advance(rest, state, true).ok()?;
        len += advanced.len;
        state = advanced.state;
        if unit.is_boundary(advanced.boundaries) {
            return Some(Advance {
                len,
                boundaries: advanced.boundaries,
                state,
            });
        }
    }
}

fn first_segment<T: Text + ?Sized>(text: &T, state: State, unit: Unit) -> Option<Segment<'_, T>> {
    let advanced = first_unit(text, state, unit)?;
    let (segment, rest) = text.split_units(advanced.len);
    Some(Segment {
        segment,
        rest,
        state: advanced.state,
    })
}

/// Split off the first extended grapheme cluster
pub fn first_grapheme_cluster<T: Text + ?Sized>(text: &T, state: State) -> Option<Segment<'_, T>> {
    first_segment(text, state, Unit::Grapheme)
}

/// Split off the first word
///
/// Punctuation and whitespace between words come back as segments of their
/// own.
///
/// Word boundaries are only found where a grapheme cluster ends. The word
/// rules can place a boundary inside a cluster: in `"a🇦\u{200D}🇧🇨b"` the
/// ZWJ splits the clusters as `🇦\u{200D}` and `🇧🇨`, while the word rules
/// pair `🇦🇧` and break before `🇨`. Such a boundary is not reported, so that
/// text comes back as `"a"`, `"🇦\u{200D}🇧🇨"`, `"b"`.
///
/// # Example
///
/// ```rust
/// use textseg_core::{first_word, State};
///
/// let w = first_word("Hello, world!", State::START).unwrap();
/// assert_eq!(w.segment, "Hello");
/// assert_eq!(w.rest, ", world!");
/// ```
pub fn first_word<T: Text + ?Sized>(text: &T, state: State) -> Option<Segment<'_, T>> {
    first_segment(text, state, Unit::Word)
}

/// Split off the first sentence, including its trailing spaces
pub fn first_sentence<T: Text + ?Sized>(text: &T, state: State) -> Option<Segment<'_, T>> {
    first_segment(text, state, Unit::Sentence)
}

/// Split off everything up to the next line break opportunity
pub fn first_line_segment<T: Text + ?Sized>(
    text: &T,
    state: State,
) -> Option<LineSegment<'_, T>> {
    let advanced = first_unit(text, state, Unit::Line)?;
    let (segment, rest) = text.split_units(advanced.len);
    Some(LineSegment {
        segment,
        rest,
        must_break: advanced.boundaries.line() == LineBreak::MustBreak,
        state: advanced.state,
    })
}

/// Iterator over the segments of one unit
///
/// Created by [`words`], [`sentences`] and [`segments`].
#[derive(Debug)]
pub struct Segments<'a, T: ?Sized> {
    rest: &'a T,
    state: State,
    unit: Unit,
}

impl<T: ?Sized> Clone for Segments<'_, T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest,
            state: self.state,
            unit: self.unit,
        }
    }
}

impl<'a, T: Text + ?Sized> Iterator for Segments<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let next = first_segment(self.rest, self.state, self.unit)?;
        self.rest = next.rest;
        self.state = next.state;
        Some(next.segment)
    }
}

/// Iterate over the segments of `unit`
pub fn segments<T: Text + ?Sized>(text: &T, unit: Unit) -> Segments<'_, T> {
    Segments {
        rest: text,
        state: State::START,
        unit,
    }
}

/// Iterate over words, punctuation and whitespace runs
pub fn words<T: Text + ?Sized>(text: &T) -> Segments<'_, T> {
    segments(text, Unit::Word)
}

/// Iterate over sentences
pub fn sentences<T: Text + ?Sized>(text: &T) -> Segments<'_, T> {
    segments(text, Unit::Sentence)
}

/// Iterator over line segments and whether each must end the line
#[derive(Debug)]
pub struct LineSegments<'a, T: ?Sized> {
    rest: &'a T,
    state: State,
}

impl<'a, T: Text + ?Sized> Iterator for LineSegments<'a, T> {
    type Item = (&'a T, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let next = first_line_segment(self.rest, self.state)?;
        self.rest = next.rest;
        self.state = next.state;
        Some((next.segment, next.must_break))
    }
}

/// Iterate over line segments
pub fn line_segments<T: Text + ?Sized>(text: &T) -> LineSegments<'_, T> {
    LineSegments {
        rest: text,
        state: State::START,
    }
}
