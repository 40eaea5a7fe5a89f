//! Break-property classes used by the segmentation rules
//!
//! Each enum is a closed, dense set so that the engine can pack a class into
//! a handful of bits of its resumable state.

macro_rules! property_class {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every class, in discriminant order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Dense index of this class
            #[inline]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Inverse of [`index`](Self::index)
            #[inline]
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(usize::from(index)).copied()
            }
        }
    };
}

property_class! {
    /// Grapheme_Cluster_Break value, with Extended_Pictographic folded in
    ///
    /// Code points that are `Extended_Pictographic` and otherwise `Other`
    /// are reported as [`GraphemeClass::ExtendedPictographic`], which is all
    /// GB11 needs.
    pub enum GraphemeClass {
        /// Any
        Other,
        /// Carriage return
        CR,
        /// Line feed
        LF,
        /// Control
        Control,
        /// Extend
        Extend,
        /// Zero width joiner
        ZWJ,
        /// Regional indicator
        RegionalIndicator,
        /// Prepend
        Prepend,
        /// SpacingMark
        SpacingMark,
        /// Hangul leading jamo
        L,
        /// Hangul vowel jamo
        V,
        /// Hangul trailing jamo
        T,
        /// Hangul LV syllable
        LV,
        /// Hangul LVT syllable
        LVT,
        /// Extended_Pictographic
        ExtendedPictographic,
    }
}

property_class! {
    /// Word_Break value
    pub enum WordClass {
        /// Any
        Other,
        /// Carriage return
        CR,
        /// Line feed
        LF,
        /// Newline
        Newline,
        /// Extend
        Extend,
        /// Zero width joiner
        ZWJ,
        /// Regional indicator
        RegionalIndicator,
        /// Format
        Format,
        /// Katakana
        Katakana,
        /// Hebrew_Letter
        HebrewLetter,
        /// ALetter
        ALetter,
        /// Single_Quote
        SingleQuote,
        /// Double_Quote
        DoubleQuote,
        /// MidNumLet
        MidNumLet,
        /// MidLetter
        MidLetter,
        /// MidNum
        MidNum,
        /// Numeric
        Numeric,
        /// ExtendNumLet
        ExtendNumLet,
        /// WSegSpace
        WSegSpace,
    }
}

property_class! {
    /// Sentence_Break value
    pub enum SentenceClass {
        /// Any
        Other,
        /// Carriage return
        CR,
        /// Line feed
        LF,
        /// Extend
        Extend,
        /// Sep
        Sep,
        /// Format
        Format,
        /// Sp
        Sp,
        /// Lower
        Lower,
        /// Upper
        Upper,
        /// OLetter
        OLetter,
        /// Numeric
        Numeric,
        /// ATerm
        ATerm,
        /// SContinue
        SContinue,
        /// STerm
        STerm,
        /// Close
        Close,
    }
}

property_class! {
    /// Line_Break value, as published (before LB1 resolution)
    #[allow(clippy::upper_case_acronyms)]
    pub enum LineClass {
        /// Mandatory break
        BK,
        /// Carriage return
        CR,
        /// Line feed
        LF,
        /// Combining mark
        CM,
        /// Next line
        NL,
        /// Surrogate
        SG,
        /// Word joiner
        WJ,
        /// Zero width space
        ZW,
        /// Non-breaking glue
        GL,
        /// Space
        SP,
        /// Zero width joiner
        ZWJ,
        /// Break opportunity before and after
        B2,
        /// Break after
        BA,
        /// Break before
        BB,
        /// Hyphen
        HY,
        /// Contingent break opportunity
        CB,
        /// Close punctuation
        CL,
        /// Close parenthesis
        CP,
        /// Exclamation/interrogation
        EX,
        /// Inseparable
        IN,
        /// Nonstarter
        NS,
        /// Open punctuation
        OP,
        /// Quotation
        QU,
        /// Infix numeric separator
        IS,
        /// Numeric
        NU,
        /// Postfix numeric
        PO,
        /// Prefix numeric
        PR,
        /// Symbols allowing break after
        SY,
        /// Ambiguous
        AI,
        /// Alphabetic
        AL,
        /// Conditional Japanese starter
        CJ,
        /// Emoji base
        EB,
        /// Emoji modifier
        EM,
        /// Hangul LV syllable
        H2,
        /// Hangul LVT syllable
        H3,
        /// Hebrew letter
        HL,
        /// Ideographic
        ID,
        /// Hangul L jamo
        JL,
        /// Hangul V jamo
        JV,
        /// Hangul T jamo
        JT,
        /// Regional indicator
        RI,
        /// Complex context dependent (South East Asian)
        SA,
        /// Unknown
        XX,
    }
}

property_class! {
    /// Indic_Conjunct_Break value (GB9c)
    pub enum IndicConjunct {
        /// None
        Other,
        /// Consonant
        Consonant,
        /// Extend
        Extend,
        /// Linker
        Linker,
    }
}

property_class! {
    /// East_Asian_Width value
    pub enum EastAsianWidth {
        /// Neutral (not East Asian)
        Neutral,
        /// Ambiguous
        Ambiguous,
        /// Halfwidth
        Halfwidth,
        /// Fullwidth
        Fullwidth,
        /// Narrow
        Narrow,
        /// Wide
        Wide,
    }
}

impl EastAsianWidth {
    /// Fullwidth, Wide or Halfwidth
    ///
    /// These are the widths LB30 treats as East Asian punctuation.
    #[inline]
    pub fn is_east_asian(self) -> bool {
        matches!(
            self,
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        )
    }
}

impl LineClass {
    /// Classes that force a break after them (LB4, LB5)
    #[inline]
    pub fn is_hard_break(self) -> bool {
        matches!(self, LineClass::BK | LineClass::CR | LineClass::LF | LineClass::NL)
    }
}
