//! Boundary classification mask

use core::fmt;

/// Line-breaking verdict at a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineBreak {
    /// No line break allowed
    DontBreak,
    /// A line may be wrapped here
    CanBreak,
    /// The line must end here
    MustBreak,
}

/// What a grapheme cluster boundary also is, for every other algorithm
///
/// Bits 0-1 hold the [`LineBreak`] verdict, bit 2 marks a word boundary and
/// bit 3 a sentence boundary. The layout is stable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Boundaries(u8);

impl Boundaries {
    /// Bits holding the line verdict
    pub const MASK_LINE: u8 = 0b0011;
    /// Line verdict: no break
    pub const LINE_DONT_BREAK: u8 = 0;
    /// Line verdict: optional break
    pub const LINE_CAN_BREAK: u8 = 1;
    /// Line verdict: mandatory break
    pub const LINE_MUST_BREAK: u8 = 2;
    /// Word boundary
    pub const WORD: u8 = 0b0100;
    /// Sentence boundary
    pub const SENTENCE: u8 = 0b1000;

    /// Mask reported at the end of the text
    pub const END_OF_TEXT: Self = Self(Self::LINE_MUST_BREAK | Self::WORD | Self::SENTENCE);

    /// Combine the per-algorithm verdicts
    ///
    /// A mandatory line break always ends the word and the sentence too.
    pub fn new(line: LineBreak, word: bool, sentence: bool) -> Self {
        let mut bits = match line {
            LineBreak::DontBreak => Self::LINE_DONT_BREAK,
            LineBreak::CanBreak => Self::LINE_CAN_BREAK,
            LineBreak::MustBreak => Self::LINE_MUST_BREAK | Self::WORD | Self::SENTENCE,
        };
        if word {
            bits |= Self::WORD;
        }
        if sentence {
            bits |= Self::SENTENCE;
        }
        Self(bits)
    }

    /// Rebuild from raw bits; unknown bits are dropped and the reserved
    /// line value `3` reads as a mandatory break
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (Self::MASK_LINE | Self::WORD | Self::SENTENCE))
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if all bits set in `mask` are set here
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    /// Line verdict
    pub fn line(self) -> LineBreak {
        match self.0 & Self::MASK_LINE {
            Self::LINE_DONT_BREAK => LineBreak::DontBreak,
            Self::LINE_CAN_BREAK => LineBreak::CanBreak,
            _ => LineBreak::MustBreak,
        }
    }

    /// Word boundary?
    pub const fn is_word(self) -> bool {
        self.contains(Self::WORD)
    }

    /// Sentence boundary?
    pub const fn is_sentence(self) -> bool {
        self.contains(Self::SENTENCE)
    }
}

impl fmt::Debug for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundaries")
            .field("line", &self.line())
            .field("word", &self.is_word())
            .field("sentence", &self.is_sentence())
            .finish()
    }
}

impl From<Boundaries> for u8 {
    fn from(b: Boundaries) -> u8 {
        b.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_layout() {
        let b = Boundaries::new(LineBreak::CanBreak, true, false);
        assert_eq!(b.bits(), 0b0101);
        assert_eq!(b.line(), LineBreak::CanBreak);
        assert!(b.is_word());
        assert!(!b.is_sentence());
    }

    #[test]
    fn test_must_break_implies_word_and_sentence() {
        let b = Boundaries::new(LineBreak::MustBreak, false, false);
        assert!(b.is_word());
        assert!(b.is_sentence());
        assert_eq!(b, Boundaries::END_OF_TEXT);
    }

    #[test]
    fn test_from_bits_masks_unknown() {
        let b = Boundaries::from_bits(0xff);
        assert_eq!(b.bits(), 0b1111);
        assert_eq!(b.line(), LineBreak::MustBreak);
        assert_eq!(Boundaries::default().line(), LineBreak::DontBreak);
    }
}
