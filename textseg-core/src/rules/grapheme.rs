//! Extended grapheme cluster rules (UAX #29, GB1-GB999)

use textseg_props::{Classification, GraphemeClass, IndicConjunct};

use crate::state::{Packer, Unpacker};

/// Progress through an `ExtPict Extend* ZWJ` sequence (GB11)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Pictographic {
    #[default]
    None,
    /// `ExtPict Extend*`
    Open,
    /// `ExtPict Extend* ZWJ`
    Joined,
}

/// Progress through `Consonant [Extend Linker]* Linker [Extend Linker]*` (GB9c)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Conjunct {
    #[default]
    None,
    /// A consonant, no linker yet
    Consonant,
    /// A consonant followed by at least one linker
    Linked,
}

/// Look-back for the grapheme rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct GraphemeRules {
    prev: Option<GraphemeClass>,
    pictographic: Pictographic,
    conjunct: Conjunct,
    /// Odd number of regional indicators directly before
    ri_odd: bool,
}

impl GraphemeRules {
    pub(crate) const BITS: u32 = 4 + 2 + 2 + 1;

    /// Does a cluster boundary fall before `next`?
    pub(crate) fn breaks_before(&self, next: &Classification) -> bool {
        use GraphemeClass::*;

        // GB1
        let Some(prev) = self.prev else {
            return true;
        };

        match (prev, next.grapheme) {
            // GB3
            (CR, LF) => false,
            // GB4, GB5
            (CR | LF | Control, _) | (_, CR | LF | Control) => true,
            // GB6, GB7, GB8
            (L, L | V | LV | LVT) | (LV | V, V | T) | (LVT | T, T) => false,
            // GB9, GB9a
            (_, Extend | ZWJ | SpacingMark) => false,
            // GB9b
            (Prepend, _) => false,
            // GB9c
            _ if self.conjunct == Conjunct::Linked
                && next.indic_conjunct == IndicConjunct::Consonant =>
            {
                false
            }
            // GB11
            (ZWJ, ExtendedPictographic) => self.pictographic != Pictographic::Joined,
            // GB12, GB13
            (RegionalIndicator, RegionalIndicator) => !self.ri_odd,
            // GB999
            _ => true,
        }
    }

    pub(crate) fn push(&mut self, next: &Classification) {
        let class = next.grapheme;
        self.pictographic = match (class, self.pictographic) {
            (GraphemeClass::ExtendedPictographic, _) => Pictographic::Open,
            (GraphemeClass::Extend, Pictographic::Open) => Pictographic::Open,
            (GraphemeClass::ZWJ, Pictographic::Open) => Pictographic::Joined,
            _ => Pictographic::None,
        };
        self.conjunct = match (next.indic_conjunct, self.conjunct) {
            (IndicConjunct::Consonant, _) => Conjunct::Consonant,
            (IndicConjunct::Linker, Conjunct::Consonant | Conjunct::Linked) => Conjunct::Linked,
            (IndicConjunct::Extend, conjunct) => conjunct,
            _ => Conjunct::None,
        };
        self.ri_odd = class == GraphemeClass::RegionalIndicator && !self.ri_odd;
        self.prev = Some(class);
    }

    pub(crate) fn pack(&self, p: &mut Packer) {
        p.put_class(self.prev.map(GraphemeClass::index), 4);
        p.put(self.pictographic as u64, 2);
        p.put(self.conjunct as u64, 2);
        p.put_bool(self.ri_odd);
    }

    pub(crate) fn unpack(u: &mut Unpacker) -> Option<Self> {
        let prev = u.take_class(4, GraphemeClass::from_index)?;
        let pictographic = match u.take(2) {
            0 => Pictographic::None,
            1 => Pictographic::Open,
            2 => Pictographic::Joined,
            _ => return None,
        };
        let conjunct = match u.take(2) {
            0 => Conjunct::None,
            1 => Conjunct::Consonant,
            2 => Conjunct::Linked,
            _ => return None,
        };
        let ri_odd = u.take_bool();
        Some(Self {
            prev,
            pictographic,
            conjunct,
            ri_odd,
        })
    }
}
