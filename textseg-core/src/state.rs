//! Resumable segmentation state
//!
//! The engine's whole memory of the text consumed so far fits into one
//! 64-bit integer. Callers thread it from one call to the next and may
//! persist it; they never need to look inside.
//!
//! Layout (low bits first): grapheme rules, word rules, sentence rules,
//! line rules. Each packs its look-back classes with `0` reserved for
//! "start of text". The packed value never uses the sign bit, so
//! [`State::START`] (`-1`) cannot collide with a mid-stream state.

use core::fmt;

use textseg_props::Classification;

use crate::error::{CoreError, Result};
use crate::rules::{GraphemeRules, LineRules, SentenceRules, WordRules};

/// Opaque resumable state
///
/// Obtain it from a previous call; start a new text with [`State::START`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(i64);

impl State {
    /// State at the start of a text
    pub const START: State = State(-1);

    /// Is this the start-of-text sentinel?
    #[inline]
    pub const fn is_start(self) -> bool {
        self.0 == Self::START.0
    }

    /// Raw integer, for persisting
    #[inline]
    pub const fn into_raw(self) -> i64 {
        self.0
    }

    /// Rebuild a state from [`into_raw`](Self::into_raw)
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] when `raw` does not decode.
    pub fn from_raw(raw: i64) -> Result<Self> {
        if raw == Self::START.0 || Context::unpack(raw).is_some() {
            Ok(State(raw))
        } else {
            Err(CoreError::InvalidState(raw))
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::START
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_start() {
            f.write_str("State::START")
        } else {
            write!(f, "State({:#x})", self.0)
        }
    }
}

impl TryFrom<i64> for State {
    type Error = CoreError;

    fn try_from(raw: i64) -> Result<Self> {
        State::from_raw(raw)
    }
}

impl From<State> for i64 {
    fn from(state: State) -> i64 {
        state.into_raw()
    }
}

/// Writes fixed-width fields into a `u64`, low bits first
#[derive(Debug, Default)]
pub(crate) struct Packer {
    bits: u64,
    shift: u32,
}

impl Packer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put(&mut self, value: u64, width: u32) {
        debug_assert!(value < (1 << width), "value {value} overflows {width} bits");
        debug_assert!(self.shift + width <= 63, "state layout exceeds 63 bits");
        self.bits |= value << self.shift;
        self.shift += width;
    }

    pub(crate) fn put_bool(&mut self, value: bool) {
        self.put(u64::from(value), 1);
    }

    /// `None` is stored as `0`, class `i` as `i + 1`
    pub(crate) fn put_class(&mut self, index: Option<u8>, width: u32) {
        self.put(index.map_or(0, |i| u64::from(i) + 1), width);
    }

    pub(crate) fn bits(&self) -> u64 {
        self.bits
    }
}

/// Reads fields written by [`Packer`] in the same order
#[derive(Debug)]
pub(crate) struct Unpacker {
    bits: u64,
}

impl Unpacker {
    pub(crate) fn new(bits: u64) -> Self {
        Self { bits }
    }

    pub(crate) fn take(&mut self, width: u32) -> u64 {
        let value = self.bits & ((1 << width) - 1);
        self.bits >>= width;
        value
    }

    pub(crate) fn take_bool(&mut self) -> bool {
        self.take(1) == 1
    }

    /// `None` if the field holds no valid class
    pub(crate) fn take_class<C>(&mut self, width: u32, from_index: fn(u8) -> Option<C>) -> Option<Option<C>> {
        match self.take(width) {
            0 => Some(None),
            code => from_index(u8::try_from(code - 1).ok()?).map(Some),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// Look-back of all four rule sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Context {
    pub(crate) grapheme: GraphemeRules,
    pub(crate) word: WordRules,
    pub(crate) sentence: SentenceRules,
    pub(crate) line: LineRules,
}

const _: () = assert!(
    GraphemeRules::BITS + WordRules::BITS + SentenceRules::BITS + LineRules::BITS <= 63
);

impl Context {
    /// Context described by `state`
    ///
    /// A state that does not decode (only possible for values forged by the
    /// caller) reads as the start of a text.
    pub(crate) fn from_state(state: State) -> Self {
        if state.is_start() {
            return Self::default();
        }
        let context = Self::unpack(state.0);
        debug_assert!(context.is_some(), "forged state {state:?}");
        context.unwrap_or_default()
    }

    pub(crate) fn to_state(self) -> State {
        let mut p = Packer::new();
        self.grapheme.pack(&mut p);
        self.word.pack(&mut p);
        self.sentence.pack(&mut p);
        self.line.pack(&mut p);
        // At most 63 bits are used, so this is never negative
        State(p.bits() as i64)
    }

    fn unpack(raw: i64) -> Option<Self> {
        let bits = u64::try_from(raw).ok()?;
        let mut u = Unpacker::new(bits);
        let context = Self {
            grapheme: GraphemeRules::unpack(&mut u)?,
            word: WordRules::unpack(&mut u)?,
            sentence: SentenceRules::unpack(&mut u)?,
            line: LineRules::unpack(&mut u)?,
        };
        u.is_empty().then_some(context)
    }

    /// Consume one code point
    #[inline]
    pub(crate) fn push(&mut self, class: &Classification) {
        self.grapheme.push(class);
        self.word.push(class);
        self.sentence.push(class);
        self.line.push(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_props::classify;

    #[test]
    fn test_start_is_distinct_from_packed_states() {
        assert!(State::START.is_start());
        assert_eq!(State::default(), State::START);

        let mut context = Context::default();
        for ch in "Hi.\u{1F1E9} (x)\u{0301}".chars() {
            context.push(&classify(ch));
            let state = context.to_state();
            assert!(!state.is_start());
            assert!(state.into_raw() >= 0);
        }
    }

    #[test]
    fn test_context_roundtrip() {
        let mut context = Context::default();
        for ch in "He said \u{201C}Stop!\u{201D}  \u{05D0}-".chars() {
            context.push(&classify(ch));
            let state = context.to_state();
            assert_eq!(Context::from_state(state), context);
        }
    }

    #[test]
    fn test_from_raw_validates() {
        let mut context = Context::default();
        context.push(&classify('a'));
        let raw = context.to_state().into_raw();

        assert_eq!(State::from_raw(raw).map(State::into_raw), Ok(raw));
        assert_eq!(State::try_from(-1), Ok(State::START));
        assert_eq!(State::from_raw(-2), Err(CoreError::InvalidState(-2)));
        assert!(State::from_raw(i64::MAX).is_err());
    }

    #[test]
    fn test_packer_field_order() {
        let mut p = Packer::new();
        p.put(0b101, 3);
        p.put_bool(true);
        p.put_class(Some(2), 4);
        let mut u = Unpacker::new(p.bits());
        assert_eq!(u.take(3), 0b101);
        assert!(u.take_bool());
        assert_eq!(u.take_class(4, Some), Some(Some(2)));
        assert!(u.is_empty());
    }
}
