//! Text representations the engine reads from
//!
//! The engine walks its input forward one code point at a time. The
//! [`Text`] trait hides whether those code points come from UTF-8 bytes
//! (possibly malformed), a `str`, or a slice of already decoded `char`s.
//! Offsets are in the unit of the input: bytes for `[u8]` and `str`, code
//! points for `[char]`.

use textseg_props::{classify, Classification};

/// Replacement for malformed UTF-8
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Input the engine can segment: `str`, `[u8]` or `[char]`
///
/// This trait is sealed.
pub trait Text: sealed::Sealed {}

impl Text for str {}
impl Text for [u8] {}
impl Text for [char] {}

pub(crate) mod sealed {
    use super::*;

    /// One decoded code point
    #[derive(Debug, Clone, Copy)]
    pub struct Decoded {
        pub ch: char,
        pub class: Classification,
        /// Units consumed
        pub len: usize,
    }

    impl Decoded {
        fn valid(ch: char, len: usize) -> Self {
            Self {
                ch,
                class: classify(ch),
                len,
            }
        }

        fn malformed(len: usize) -> Self {
            Self {
                ch: REPLACEMENT_CHARACTER,
                class: Classification::REPLACEMENT,
                len,
            }
        }
    }

    pub trait Sealed {
        /// Length in units
        fn units(&self) -> usize;

        /// Decode the code point starting at `at`
        ///
        /// Returns `None` when `at` is the end, or when the remaining units
        /// are a truncated sequence and more input may still follow
        /// (`at_end == false`).
        fn decode_at(&self, at: usize, at_end: bool) -> Option<Decoded>;

        /// Split at a unit offset previously returned by the engine
        fn split_units(&self, at: usize) -> (&Self, &Self);

        /// Last code point, malformed tails reading as U+FFFD
        fn last_code_point(&self) -> Option<char>;
    }

    impl Sealed for str {
        #[inline]
        fn units(&self) -> usize {
            self.len()
        }

        #[inline]
        fn decode_at(&self, at: usize, _at_end: bool) -> Option<Decoded> {
            let ch = self.get(at..)?.chars().next()?;
            Some(Decoded::valid(ch, ch.len_utf8()))
        }

        fn split_units(&self, at: usize) -> (&Self, &Self) {
            self.split_at(at)
        }

        fn last_code_point(&self) -> Option<char> {
            self.chars().next_back()
        }
    }

    impl Sealed for [u8] {
        #[inline]
        fn units(&self) -> usize {
            self.len()
        }

        fn decode_at(&self, at: usize, at_end: bool) -> Option<Decoded> {
            let bytes = self.get(at..)?;
            let first = *bytes.first()?;
            if first.is_ascii() {
                return Some(Decoded::valid(char::from(first), 1));
            }

            let window = &bytes[..bytes.len().min(4)];
            let valid = match core::str::from_utf8(window) {
                Ok(s) => s,
                Err(e) if e.valid_up_to() > 0 => {
                    core::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default()
                }
                Err(e) => {
                    return match e.error_len() {
                        Some(len) => Some(Decoded::malformed(len)),
                        // Truncated sequence at the end of the buffer
                        None if at_end => Some(Decoded::malformed(window.len())),
                        None => None,
                    };
                }
            };
            let ch = valid.chars().next()?;
            Some(Decoded::valid(ch, ch.len_utf8()))
        }

        fn split_units(&self, at: usize) -> (&Self, &Self) {
            self.split_at(at)
        }

        fn last_code_point(&self) -> Option<char> {
            if self.is_empty() {
                return None;
            }
            for width in 1..=self.len().min(4) {
                let tail = &self[self.len() - width..];
                if let Ok(s) = core::str::from_utf8(tail) {
                    return s.chars().next_back();
                }
            }
            Some(REPLACEMENT_CHARACTER)
        }
    }

    impl Sealed for [char] {
        #[inline]
        fn units(&self) -> usize {
            self.len()
        }

        #[inline]
        fn decode_at(&self, at: usize, _at_end: bool) -> Option<Decoded> {
            self.get(at).map(|&ch| Decoded::valid(ch, 1))
        }

        fn split_units(&self, at: usize) -> (&Self, &Self) {
            self.split_at(at)
        }

        fn last_code_point(&self) -> Option<char> {
            self.last().copied()
        }
    }
}

/// More input is needed before a decision can be made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Starved;

/// Iterator over the code points of a [`Text`]
///
/// Malformed UTF-8 yields U+FFFD, one per maximal invalid subpart.
#[derive(Debug)]
pub struct CodePoints<'a, T: Text + ?Sized> {
    text: &'a T,
    pos: usize,
}

impl<'a, T: Text + ?Sized> CodePoints<'a, T> {
    pub(crate) fn new(text: &'a T) -> Self {
        Self { text, pos: 0 }
    }
}

impl<T: Text + ?Sized> Clone for CodePoints<'_, T> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            pos: self.pos,
        }
    }
}

impl<T: Text + ?Sized> Iterator for CodePoints<'_, T> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let decoded = self.text.decode_at(self.pos, true)?;
        self.pos += decoded.len;
        Some(decoded.ch)
    }
}

/// Iterate over the code points of `text`
pub fn code_points<T: Text + ?Sized>(text: &T) -> CodePoints<'_, T> {
    CodePoints::new(text)
}

/// Look-ahead over the input that has not been consumed yet
///
/// Yields `Err(Starved)` instead of ending when the buffer runs out but more
/// input may follow.
pub(crate) struct Ahead<'t, T: ?Sized> {
    text: &'t T,
    pos: usize,
    at_end: bool,
}

impl<'t, T: Text + ?Sized> Ahead<'t, T> {
    pub(crate) fn new(text: &'t T, pos: usize, at_end: bool) -> Self {
        Self { text, pos, at_end }
    }
}

impl<T: ?Sized> Clone for Ahead<'_, T> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            pos: self.pos,
            at_end: self.at_end,
        }
    }
}

impl<T: Text + ?Sized> Iterator for Ahead<'_, T> {
    type Item = Result<Classification, Starved>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.units() {
            return if self.at_end { None } else { Some(Err(Starved)) };
        }
        match self.text.decode_at(self.pos, self.at_end) {
            Some(decoded) => {
                self.pos += decoded.len;
                Some(Ok(decoded.class))
            }
            None => Some(Err(Starved)),
        }
    }
}
