//! Adapter over the compiled Unicode property data
//!
//! Every lookup here is a trie access into `icu_properties` baked data. The
//! mapping is total: values this crate has no rule for fall back to the
//! property default (`Other` / `XX`).

use icu_properties::props as icu;
use icu_properties::{CodePointMapData, CodePointSetData};

use crate::class::{
    EastAsianWidth, GraphemeClass, IndicConjunct, LineClass, SentenceClass, WordClass,
};

/// Unicode revision of the property data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Update version
    pub micro: u8,
}

impl UnicodeVersion {
    /// Version `major.minor.micro`
    pub const fn new(major: u8, minor: u8, micro: u8) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }
}

impl core::fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// The Unicode version the classification tables were generated from
///
/// This is the revision of the property data only. The rule sets consuming
/// it carry their own revision.
pub const UNICODE_VERSION: UnicodeVersion = UnicodeVersion::new(16, 0, 0);

/// Raw Grapheme_Cluster_Break lookup, without the pictographic fold
pub fn grapheme_break(ch: char) -> GraphemeClass {
    match CodePointMapData::<icu::GraphemeClusterBreak>::new().get(ch) {
        icu::GraphemeClusterBreak::CR => GraphemeClass::CR,
        icu::GraphemeClusterBreak::LF => GraphemeClass::LF,
        icu::GraphemeClusterBreak::Control => GraphemeClass::Control,
        icu::GraphemeClusterBreak::Extend => GraphemeClass::Extend,
        // Legacy emoji modifiers behave as Extend since Unicode 11
        icu::GraphemeClusterBreak::EModifier => GraphemeClass::Extend,
        icu::GraphemeClusterBreak::ZWJ => GraphemeClass::ZWJ,
        icu::GraphemeClusterBreak::RegionalIndicator => GraphemeClass::RegionalIndicator,
        icu::GraphemeClusterBreak::Prepend => GraphemeClass::Prepend,
        icu::GraphemeClusterBreak::SpacingMark => GraphemeClass::SpacingMark,
        icu::GraphemeClusterBreak::L => GraphemeClass::L,
        icu::GraphemeClusterBreak::V => GraphemeClass::V,
        icu::GraphemeClusterBreak::T => GraphemeClass::T,
        icu::GraphemeClusterBreak::LV => GraphemeClass::LV,
        icu::GraphemeClusterBreak::LVT => GraphemeClass::LVT,
        _ => GraphemeClass::Other,
    }
}

/// Word_Break lookup
pub fn word_break(ch: char) -> WordClass {
    match CodePointMapData::<icu::WordBreak>::new().get(ch) {
        icu::WordBreak::CR => WordClass::CR,
        icu::WordBreak::LF => WordClass::LF,
        icu::WordBreak::Newline => WordClass::Newline,
        icu::WordBreak::Extend => WordClass::Extend,
        icu::WordBreak::EModifier => WordClass::Extend,
        icu::WordBreak::ZWJ => WordClass::ZWJ,
        icu::WordBreak::RegionalIndicator => WordClass::RegionalIndicator,
        icu::WordBreak::Format => WordClass::Format,
        icu::WordBreak::Katakana => WordClass::Katakana,
        icu::WordBreak::HebrewLetter => WordClass::HebrewLetter,
        icu::WordBreak::ALetter => WordClass::ALetter,
        icu::WordBreak::SingleQuote => WordClass::SingleQuote,
        icu::WordBreak::DoubleQuote => WordClass::DoubleQuote,
        icu::WordBreak::MidNumLet => WordClass::MidNumLet,
        icu::WordBreak::MidLetter => WordClass::MidLetter,
        icu::WordBreak::MidNum => WordClass::MidNum,
        icu::WordBreak::Numeric => WordClass::Numeric,
        icu::WordBreak::ExtendNumLet => WordClass::ExtendNumLet,
        icu::WordBreak::WSegSpace => WordClass::WSegSpace,
        _ => WordClass::Other,
    }
}

/// Sentence_Break lookup
pub fn sentence_break(ch: char) -> SentenceClass {
    match CodePointMapData::<icu::SentenceBreak>::new().get(ch) {
        icu::SentenceBreak::CR => SentenceClass::CR,
        icu::SentenceBreak::LF => SentenceClass::LF,
        icu::SentenceBreak::Extend => SentenceClass::Extend,
        icu::SentenceBreak::Sep => SentenceClass::Sep,
        icu::SentenceBreak::Format => SentenceClass::Format,
        icu::SentenceBreak::Sp => SentenceClass::Sp,
        icu::SentenceBreak::Lower => SentenceClass::Lower,
        icu::SentenceBreak::Upper => SentenceClass::Upper,
        icu::SentenceBreak::OLetter => SentenceClass::OLetter,
        icu::SentenceBreak::Numeric => SentenceClass::Numeric,
        icu::SentenceBreak::ATerm => SentenceClass::ATerm,
        icu::SentenceBreak::SContinue => SentenceClass::SContinue,
        icu::SentenceBreak::STerm => SentenceClass::STerm,
        icu::SentenceBreak::Close => SentenceClass::Close,
        _ => SentenceClass::Other,
    }
}

/// Line_Break lookup
///
/// Classes introduced after the implemented rule set (the Brahmic aksara
/// classes) are reported as `XX`, which LB1 resolves to `AL`.
pub fn line_break(ch: char) -> LineClass {
    // HYPHEN is BA under the rule set we implement (it moved to HH later)
    if ch == '\u{2010}' {
        return LineClass::BA;
    }
    match CodePointMapData::<icu::LineBreak>::new().get(ch) {
        icu::LineBreak::MandatoryBreak => LineClass::BK,
        icu::LineBreak::CarriageReturn => LineClass::CR,
        icu::LineBreak::LineFeed => LineClass::LF,
        icu::LineBreak::CombiningMark => LineClass::CM,
        icu::LineBreak::NextLine => LineClass::NL,
        icu::LineBreak::Surrogate => LineClass::SG,
        icu::LineBreak::WordJoiner => LineClass::WJ,
        icu::LineBreak::ZWSpace => LineClass::ZW,
        icu::LineBreak::Glue => LineClass::GL,
        icu::LineBreak::Space => LineClass::SP,
        icu::LineBreak::ZWJ => LineClass::ZWJ,
        icu::LineBreak::BreakBoth => LineClass::B2,
        icu::LineBreak::BreakAfter => LineClass::BA,
        icu::LineBreak::BreakBefore => LineClass::BB,
        icu::LineBreak::Hyphen => LineClass::HY,
        icu::LineBreak::ContingentBreak => LineClass::CB,
        icu::LineBreak::ClosePunctuation => LineClass::CL,
        icu::LineBreak::CloseParenthesis => LineClass::CP,
        icu::LineBreak::Exclamation => LineClass::EX,
        icu::LineBreak::Inseparable => LineClass::IN,
        icu::LineBreak::Nonstarter => LineClass::NS,
        icu::LineBreak::OpenPunctuation => LineClass::OP,
        icu::LineBreak::Quotation => LineClass::QU,
        icu::LineBreak::InfixNumeric => LineClass::IS,
        icu::LineBreak::Numeric => LineClass::NU,
        icu::LineBreak::PostfixNumeric => LineClass::PO,
        icu::LineBreak::PrefixNumeric => LineClass::PR,
        icu::LineBreak::BreakSymbols => LineClass::SY,
        icu::LineBreak::Ambiguous => LineClass::AI,
        icu::LineBreak::Alphabetic => LineClass::AL,
        icu::LineBreak::ConditionalJapaneseStarter => LineClass::CJ,
        icu::LineBreak::EBase => LineClass::EB,
        icu::LineBreak::EModifier => LineClass::EM,
        icu::LineBreak::H2 => LineClass::H2,
        icu::LineBreak::H3 => LineClass::H3,
        icu::LineBreak::HebrewLetter => LineClass::HL,
        icu::LineBreak::Ideographic => LineClass::ID,
        icu::LineBreak::JL => LineClass::JL,
        icu::LineBreak::JV => LineClass::JV,
        icu::LineBreak::JT => LineClass::JT,
        icu::LineBreak::RegionalIndicator => LineClass::RI,
        icu::LineBreak::ComplexContext => LineClass::SA,
        _ => LineClass::XX,
    }
}

/// Indic_Conjunct_Break lookup
pub fn indic_conjunct_break(ch: char) -> IndicConjunct {
    match CodePointMapData::<icu::IndicConjunctBreak>::new().get(ch) {
        icu::IndicConjunctBreak::Consonant => IndicConjunct::Consonant,
        icu::IndicConjunctBreak::Extend => IndicConjunct::Extend,
        icu::IndicConjunctBreak::Linker => IndicConjunct::Linker,
        _ => IndicConjunct::Other,
    }
}

/// East_Asian_Width lookup
pub fn east_asian_width(ch: char) -> EastAsianWidth {
    match CodePointMapData::<icu::EastAsianWidth>::new().get(ch) {
        icu::EastAsianWidth::Ambiguous => EastAsianWidth::Ambiguous,
        icu::EastAsianWidth::Halfwidth => EastAsianWidth::Halfwidth,
        icu::EastAsianWidth::Fullwidth => EastAsianWidth::Fullwidth,
        icu::EastAsianWidth::Narrow => EastAsianWidth::Narrow,
        icu::EastAsianWidth::Wide => EastAsianWidth::Wide,
        _ => EastAsianWidth::Neutral,
    }
}

/// Extended_Pictographic membership
#[inline]
pub fn is_extended_pictographic(ch: char) -> bool {
    CodePointSetData::new::<icu::ExtendedPictographic>().contains(ch)
}

/// General_Category = Cn
#[inline]
pub fn is_unassigned(ch: char) -> bool {
    CodePointMapData::<icu::GeneralCategory>::new().get(ch) == icu::GeneralCategory::Unassigned
}
