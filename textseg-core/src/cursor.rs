//! Cursor over grapheme clusters with per-boundary metadata

use core::ops::Range;

use crate::boundaries::{Boundaries, LineBreak};
use crate::state::State;
use crate::step::advance;
use crate::text::{CodePoints, Text};

/// Walks a text one grapheme cluster at a time
///
/// After each successful [`advance`](Graphemes::advance) the accessors
/// describe the current cluster and the boundary at its end. Before the
/// first advance and after the text is exhausted the current cluster is
/// empty.
///
/// # Example
///
/// ```rust
/// use textseg_core::Graphemes;
///
/// let mut g = Graphemes::new("\u{1F44D}\u{1F3FC}!");
/// let mut clusters = Vec::new();
/// while g.advance() {
///     clusters.push(g.code_points().map(|c| c as u32).collect::<Vec<_>>());
/// }
/// assert_eq!(clusters, vec![vec![0x1F44D, 0x1F3FC], vec![0x21]]);
/// ```
#[derive(Debug)]
pub struct Graphemes<'a, T: ?Sized = str> {
    text: &'a T,
    /// Start of the current cluster
    start: usize,
    /// End of the current cluster
    end: usize,
    boundaries: Boundaries,
    state: State,
    exhausted: bool,
}

impl<T: ?Sized> Clone for Graphemes<'_, T> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            start: self.start,
            end: self.end,
            boundaries: self.boundaries,
            state: self.state,
            exhausted: self.exhausted,
        }
    }
}

impl<'a, T: Text + ?Sized> Graphemes<'a, T> {
    /// Cursor positioned before the first cluster of `text`
    pub fn new(text: &'a T) -> Self {
        Self {
            text,
            start: 0,
            end: 0,
            boundaries: Boundaries::default(),
            state: State::START,
            exhausted: false,
        }
    }

    /// Move to the next cluster; `false` once the text is exhausted
    ///
    /// Exhaustion is final: later calls keep returning `false` until
    /// [`reset`](Self::reset).
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        debug_assert!(
            self.end == 0 || !self.state.is_start(),
            "start-of-text state threaded past the first cluster"
        );

        let (_, rest) = self.text.split_units(self.end);
        let advanced = match rest.units() {
            0 => None,
            _ => advance(rest, self.state, true).ok(),
        };

        self.start = self.end;
        match advanced {
            Some(advanced) => {
                self.end += advanced.len;
                self.boundaries = advanced.boundaries;
                self.state = advanced.state;
                true
            }
            None => {
                self.exhausted = true;
                self.boundaries = Boundaries::default();
                false
            }
        }
    }

    /// The current cluster
    pub fn cluster(&self) -> &'a T {
        let (head, _) = self.text.split_units(self.end);
        head.split_units(self.start).1
    }

    /// Code points of the current cluster
    pub fn code_points(&self) -> CodePoints<'a, T> {
        CodePoints::new(self.cluster())
    }

    /// Span of the current cluster, in units of the input
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Classification of the boundary after the current cluster
    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// A word ends after the current cluster
    pub fn is_word_boundary(&self) -> bool {
        self.boundaries.is_word()
    }

    /// A sentence ends after the current cluster
    pub fn is_sentence_boundary(&self) -> bool {
        self.boundaries.is_sentence()
    }

    /// Line verdict after the current cluster
    pub fn line_break(&self) -> LineBreak {
        self.boundaries.line()
    }

    /// State after the current cluster
    pub fn state(&self) -> State {
        self.state
    }

    /// Back to the start of the text
    pub fn reset(&mut self) {
        *self = Self::new(self.text);
    }
}

impl<'a, T: Text + ?Sized> Iterator for Graphemes<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.advance().then(|| self.cluster())
    }
}

impl<T: Text + ?Sized> core::iter::FusedIterator for Graphemes<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut g = Graphemes::new("ab");
        assert_eq!(g.cluster(), "");
        assert!(g.advance());
        assert_eq!(g.cluster(), "a");
        assert_eq!(g.span(), 0..1);
        assert!(g.advance());
        assert_eq!(g.cluster(), "b");
        assert_eq!(g.line_break(), LineBreak::MustBreak);
        assert!(!g.advance());
        assert!(!g.advance());
        assert_eq!(g.cluster(), "");

        g.reset();
        assert!(g.advance());
        assert_eq!(g.cluster(), "a");
    }

    #[test]
    fn test_boundary_accessors() {
        let mut g = Graphemes::new("Hi. Yo");
        let mut marks = String::new();
        while g.advance() {
            marks.push_str(g.cluster());
            if g.is_sentence_boundary() {
                marks.push('#');
            } else if g.is_word_boundary() {
                marks.push('|');
            }
        }
        assert_eq!(marks, "Hi|.| #Yo#");
    }

    #[test]
    fn test_word_marks_from_step_loop() {
        let mut g = Graphemes::new("Hello, world!");
        let mut marks = String::new();
        while g.advance() {
            marks.push_str(g.cluster());
            if g.is_word_boundary() {
                marks.push('|');
            }
        }
        assert_eq!(marks, "Hello|,| |world|!|");
    }

    #[test]
    fn test_line_marks() {
        let mut g = Graphemes::new("First line.\nSecond line.");
        let mut marks = String::new();
        while g.advance() {
            marks.push_str(g.cluster());
            match g.line_break() {
                LineBreak::CanBreak => marks.push('|'),
                LineBreak::MustBreak => marks.push('\u{2016}'),
                LineBreak::DontBreak => {}
            }
        }
        assert_eq!(marks, "First |line.\n\u{2016}Second |line.\u{2016}");
    }

    #[test]
    fn test_iterator_over_chars() {
        let chars: Vec<char> = "e\u{0301}x".chars().collect();
        let clusters: Vec<&[char]> = Graphemes::new(chars.as_slice()).collect();
        assert_eq!(clusters, vec![&['e', '\u{0301}'][..], &['x'][..]]);
    }

    #[test]
    fn test_malformed_bytes() {
        let bytes: &[u8] = b"a\xffb";
        let clusters: Vec<&[u8]> = Graphemes::new(bytes).collect();
        assert_eq!(clusters, vec![&b"a"[..], &b"\xff"[..], &b"b"[..]]);
        let mut g = Graphemes::new(bytes);
        g.advance();
        g.advance();
        assert_eq!(g.code_points().collect::<String>(), "\u{FFFD}");
    }
}
