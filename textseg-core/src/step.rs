//! The combined boundary engine
//!
//! One call consumes one extended grapheme cluster and reports, for the
//! boundary at its end, the word, sentence and line-break verdicts at the
//! same time. Grapheme boundaries are a superset of the other three, so the
//! expensive rules only run where the cheap one says "break".

use crate::boundaries::Boundaries;
use crate::state::{Context, State};
use crate::text::{Ahead, Starved, Text};

/// One grapheme cluster and what follows it
///
/// Word, sentence and line boundaries are reported at cluster ends only. A
/// word boundary the word rules would place inside a cluster (see
/// [`first_word`](crate::first_word)) is not reported.
#[derive(Debug, PartialEq, Eq)]
pub struct Step<'a, T: ?Sized> {
    /// The cluster, never empty
    pub segment: &'a T,
    /// The text after the cluster
    pub rest: &'a T,
    /// Classification of the boundary at the end of `segment`
    pub boundaries: Boundaries,
    /// State to pass along with `rest`
    pub state: State,
}

impl<T: ?Sized> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Step<'_, T> {}

/// Result of the engine in units, before slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Advance {
    pub(crate) len: usize,
    pub(crate) boundaries: Boundaries,
    pub(crate) state: State,
}

/// Run the engine over the first cluster of a non-empty `text`
///
/// With `at_end == false` the text is a prefix of a longer input. Any
/// decision that would need to see past it, including the end of the cluster
/// itself, fails with [`Starved`] instead of assuming the text ends there.
pub(crate) fn advance<T: Text + ?Sized>(
    text: &T,
    state: State,
    at_end: bool,
) -> Result<Advance, Starved> {
    let mut context = Context::from_state(state);

    // The first code point always belongs to the cluster
    let first = text.decode_at(0, at_end).ok_or(Starved)?;
    context.push(&first.class);
    let mut pos = first.len;

    loop {
        if pos >= text.units() {
            if !at_end {
                return Err(Starved);
            }
            // LB3, WB2, SB2
            return Ok(Advance {
                len: pos,
                boundaries: Boundaries::END_OF_TEXT,
                state: context.to_state(),
            });
        }

        let next = text.decode_at(pos, at_end).ok_or(Starved)?;
        if context.grapheme.breaks_before(&next.class) {
            let ahead = Ahead::new(text, pos + next.len, at_end);
            let word = context.word.breaks_before(&next.class, ahead.clone())?;
            let sentence = context.sentence.breaks_before(&next.class, ahead)?;
            let line = context.line.breaks_before(&next.class);
            return Ok(Advance {
                len: pos,
                boundaries: Boundaries::new(line, word, sentence),
                state: context.to_state(),
            });
        }

        context.push(&next.class);
        pos += next.len;
    }
}

/// Consume the first grapheme cluster of `text`
///
/// Pass [`State::START`] for the beginning of a text and the returned
/// [`Step::state`] together with [`Step::rest`] afterwards. Returns `None`
/// only for empty input.
///
/// The boundary at the end of the text is reported as a mandatory line
/// break that is also a word and sentence boundary.
///
/// # Example
///
/// ```rust
/// use textseg_core::{step, LineBreak, State};
///
/// let mut text = "Hi you";
/// let mut state = State::START;
/// let mut lines = Vec::new();
/// while let Some(s) = step(text, state) {
///     lines.push((s.segment, s.boundaries.line()));
///     text = s.rest;
///     state = s.state;
/// }
/// assert_eq!(lines[2], (" ", LineBreak::CanBreak));
/// ```
pub fn step<T: Text + ?Sized>(text: &T, state: State) -> Option<Step<'_, T>> {
    if text.units() == 0 {
        return None;
    }
    let advanced = advance(text, state, true).ok()?;
    let (segment, rest) = text.split_units(advanced.len);
    Some(Step {
        segment,
        rest,
        boundaries: advanced.boundaries,
        state: advanced.state,
    })
}

/// Outcome of [`step_partial`]
#[derive(Debug, PartialEq, Eq)]
pub enum Progress<'a, T: ?Sized> {
    /// The first cluster is settled
    Cluster(Step<'a, T>),
    /// Nothing can be decided before more input arrives
    NeedMore,
    /// The final piece was empty
    Done,
}

/// Like [`step`], for a text that may continue past `text`
///
/// Nothing is decided that more input could change: when the end of the
/// cluster, a look-ahead or a UTF-8 sequence runs into the end of `text`,
/// the result is [`Progress::NeedMore`] and the caller should retry with
/// more input appended. Pass `at_end = true` for the final piece, which
/// then behaves exactly like [`step`].
pub fn step_partial<T: Text + ?Sized>(text: &T, state: State, at_end: bool) -> Progress<'_, T> {
    if text.units() == 0 {
        return if at_end { Progress::Done } else { Progress::NeedMore };
    }
    match advance(text, state, at_end) {
        Ok(advanced) => {
            let (segment, rest) = text.split_units(advanced.len);
            Progress::Cluster(Step {
                segment,
                rest,
                boundaries: advanced.boundaries,
                state: advanced.state,
            })
        }
        Err(Starved) => Progress::NeedMore,
    }
}
