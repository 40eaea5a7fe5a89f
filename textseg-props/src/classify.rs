//! Per-code-point classification with an ASCII fast path

use std::sync::OnceLock;

use crate::class::{
    EastAsianWidth, GraphemeClass, IndicConjunct, LineClass, SentenceClass, WordClass,
};
use crate::tables;

/// Every break property of one code point
///
/// This is a pure function of the code point and [`crate::UNICODE_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Grapheme cluster class (pictographic fold applied)
    pub grapheme: GraphemeClass,
    /// Indic conjunct class
    pub indic_conjunct: IndicConjunct,
    /// Word class
    pub word: WordClass,
    /// Sentence class
    pub sentence: SentenceClass,
    /// Line class before LB1 resolution
    pub line: LineClass,
    /// East Asian width
    pub east_asian_width: EastAsianWidth,
    /// Extended_Pictographic
    pub extended_pictographic: bool,
    /// General_Category is Cn
    pub unassigned: bool,
}

impl Classification {
    /// Classification given to malformed input (decoded as U+FFFD)
    pub const REPLACEMENT: Self = Self {
        grapheme: GraphemeClass::Other,
        indic_conjunct: IndicConjunct::Other,
        word: WordClass::Other,
        sentence: SentenceClass::Other,
        line: LineClass::XX,
        east_asian_width: EastAsianWidth::Neutral,
        extended_pictographic: false,
        unassigned: false,
    };

    /// Look up all properties of `ch` in the tables
    fn lookup(ch: char) -> Self {
        let extended_pictographic = tables::is_extended_pictographic(ch);
        let grapheme = match tables::grapheme_break(ch) {
            GraphemeClass::Other if extended_pictographic => GraphemeClass::ExtendedPictographic,
            class => class,
        };

        Self {
            grapheme,
            indic_conjunct: tables::indic_conjunct_break(ch),
            word: tables::word_break(ch),
            sentence: tables::sentence_break(ch),
            line: tables::line_break(ch),
            east_asian_width: tables::east_asian_width(ch),
            extended_pictographic,
            unassigned: tables::is_unassigned(ch),
        }
    }
}

/// Classify a code point - hot path
#[inline]
pub fn classify(ch: char) -> Classification {
    if ch.is_ascii() {
        // Fast path: direct array lookup
        ascii_table()[ch as usize]
    } else {
        Classification::lookup(ch)
    }
}

fn ascii_table() -> &'static [Classification; 128] {
    static ASCII: OnceLock<[Classification; 128]> = OnceLock::new();
    ASCII.get_or_init(|| {
        let mut table = [Classification::REPLACEMENT; 128];
        for (byte, slot) in (0u8..128).zip(table.iter_mut()) {
            *slot = Classification::lookup(char::from(byte));
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii_table_matches_lookup() {
        for byte in 0u8..128 {
            let ch = char::from(byte);
            assert_eq!(classify(ch), Classification::lookup(ch), "mismatch for {ch:?}");
        }
    }

    #[test]
    fn test_pictographic_fold() {
        let thumbs = classify('\u{1F44D}');
        assert_eq!(thumbs.grapheme, GraphemeClass::ExtendedPictographic);
        assert!(thumbs.extended_pictographic);

        // Pictographs outside the emoji blocks fold too
        let copyright = classify('\u{00A9}');
        assert!(copyright.extended_pictographic);
        assert_eq!(copyright.grapheme, GraphemeClass::ExtendedPictographic);

        let letter = classify('a');
        assert_eq!(letter.grapheme, GraphemeClass::Other);
        assert!(!letter.extended_pictographic);
    }

    #[test]
    fn test_replacement_is_other_everywhere() {
        let r = Classification::REPLACEMENT;
        assert_eq!(r.grapheme, GraphemeClass::Other);
        assert_eq!(r.indic_conjunct, IndicConjunct::Other);
        assert_eq!(r.word, WordClass::Other);
        assert_eq!(r.sentence, SentenceClass::Other);
        assert_eq!(r.line, LineClass::XX);
    }

    #[test]
    fn test_unassigned_pictographic() {
        // Reserved code points in the pictographic blocks
        let reserved = classify('\u{1FFFD}');
        assert!(reserved.unassigned);
        assert!(reserved.extended_pictographic);
    }

    proptest! {
        #[test]
        fn prop_classification_is_idempotent(ch in any::<char>()) {
            prop_assert_eq!(classify(ch), classify(ch));
        }
    }
}
