//! Line breaking rules (UAX #14, LB1-LB31)
//!
//! Implements the tailorable default algorithm without look-ahead: every
//! rule here is decided by the look-back carried in [`LineRules`] and the
//! class of the next code point.

use textseg_props::{Classification, GraphemeClass, LineClass};

use crate::boundaries::LineBreak;
use crate::state::{Packer, Unpacker};

/// LB1: resolve classes whose behavior the default algorithm leaves open
fn resolve(class: &Classification) -> LineClass {
    use LineClass::*;

    match class.line {
        AI | SG | XX => AL,
        SA if matches!(
            class.grapheme,
            GraphemeClass::Extend | GraphemeClass::SpacingMark
        ) =>
        {
            CM
        }
        SA => AL,
        CJ => NS,
        other => other,
    }
}

/// Classes a combining mark cannot attach to (LB9)
#[inline]
fn stops_combining(class: LineClass) -> bool {
    class.is_hard_break() || matches!(class, LineClass::SP | LineClass::ZW)
}

/// LB25, as the pair table of the Unicode 15.0 rule
fn numeric_pair(prev: LineClass, cur: LineClass) -> bool {
    use LineClass::*;

    matches!(
        (prev, cur),
        (CL | CP | NU, PO | PR)
            | (PO | PR, OP | NU)
            | (HY | IS | NU | SY, NU)
    )
}

/// Look-back for the line rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LineRules {
    /// Resolved class of the code point directly before
    prev_raw: Option<LineClass>,
    /// Class after LB9/LB10 of the last code point that was not absorbed
    prev: Option<LineClass>,
    /// Class before the current run of spaces (or `prev` if there is none)
    before_spaces: Option<LineClass>,
    ri_odd: bool,
    /// `HL (HY | BA)` just ended (LB21a)
    hebrew_hyphen: bool,
    /// Previous code point is East Asian F/W/H (LB30)
    prev_east_asian: bool,
    /// Previous code point is an unassigned pictographic (LB30b)
    prev_unassigned_pictographic: bool,
}

impl LineRules {
    pub(crate) const BITS: u32 = 6 + 6 + 6 + 4;

    /// Line verdict for the position before `next`
    pub(crate) fn breaks_before(&self, next: &Classification) -> LineBreak {
        use LineBreak::*;
        use LineClass::*;

        // LB2
        let (Some(prev_raw), Some(prev)) = (self.prev_raw, self.prev) else {
            return DontBreak;
        };
        let cur = resolve(next);

        // LB4
        if prev_raw == BK {
            return MustBreak;
        }
        // LB5
        match (prev_raw, cur) {
            (CR, LF) => return DontBreak,
            (CR | LF | NL, _) => return MustBreak,
            _ => {}
        }
        // LB6, LB7
        if cur.is_hard_break() || matches!(cur, SP | ZW) {
            return DontBreak;
        }
        // LB8
        if self.before_spaces == Some(ZW) {
            return CanBreak;
        }
        // LB8a
        if prev_raw == ZWJ {
            return DontBreak;
        }
        // LB9
        if matches!(cur, CM | ZWJ) && !stops_combining(prev_raw) {
            return DontBreak;
        }
        // LB10
        let cur = if matches!(cur, CM | ZWJ) { AL } else { cur };

        // LB11
        if cur == WJ || prev == WJ {
            return DontBreak;
        }
        // LB12
        if prev == GL {
            return DontBreak;
        }
        // LB12a
        if cur == GL && !matches!(prev, SP | BA | HY) {
            return DontBreak;
        }
        // LB13
        if matches!(cur, CL | CP | EX | IS | SY) {
            return DontBreak;
        }
        // LB14
        if self.before_spaces == Some(OP) {
            return DontBreak;
        }
        // LB15, LB16, LB17
        match (self.before_spaces, cur) {
            (Some(QU), OP) | (Some(CL | CP), NS) | (Some(B2), B2) => return DontBreak,
            _ => {}
        }
        // LB18
        if prev == SP {
            return CanBreak;
        }
        // LB19
        if cur == QU || prev == QU {
            return DontBreak;
        }
        // LB20
        if cur == CB || prev == CB {
            return CanBreak;
        }
        // LB21
        if matches!(cur, BA | HY | NS) || prev == BB {
            return DontBreak;
        }
        // LB21a
        if self.hebrew_hyphen {
            return DontBreak;
        }
        // LB21b
        if prev == SY && cur == HL {
            return DontBreak;
        }
        // LB22
        if cur == IN {
            return DontBreak;
        }

        let dont = match (prev, cur) {
            // LB23
            (AL | HL, NU) | (NU, AL | HL) => true,
            // LB23a
            (PR, ID | EB | EM) | (ID | EB | EM, PO) => true,
            // LB24
            (PR | PO, AL | HL) | (AL | HL, PR | PO) => true,
            // LB25
            (p, c) if numeric_pair(p, c) => true,
            // LB26
            (JL, JL | JV | H2 | H3) | (JV | H2, JV | JT) | (JT | H3, JT) => true,
            // LB27
            (JL | JV | JT | H2 | H3, PO) | (PR, JL | JV | JT | H2 | H3) => true,
            // LB28
            (AL | HL, AL | HL) => true,
            // LB29
            (IS, AL | HL) => true,
            // LB30
            (AL | HL | NU, OP) => !next.east_asian_width.is_east_asian(),
            (CP, AL | HL | NU) => !self.prev_east_asian,
            // LB30a
            (RI, RI) => self.ri_odd,
            // LB30b
            (EB, EM) => true,
            (_, EM) => self.prev_unassigned_pictographic,
            _ => false,
        };
        if dont {
            DontBreak
        } else {
            // LB31
            CanBreak
        }
    }

    pub(crate) fn push(&mut self, class: &Classification) {
        use LineClass::*;

        let raw = resolve(class);
        let combining = matches!(raw, CM | ZWJ);
        if combining && self.prev_raw.is_some_and(|p| !stops_combining(p)) {
            // LB9: the mark takes the class of its base
            self.prev_raw = Some(raw);
            return;
        }

        let effective = if combining { AL } else { raw };
        if effective == SP {
            if self.prev != Some(SP) {
                self.before_spaces = self.prev;
            }
        } else {
            self.before_spaces = Some(effective);
        }
        self.hebrew_hyphen = matches!(effective, HY | BA) && self.prev == Some(HL);
        self.ri_odd = effective == RI && !self.ri_odd;
        self.prev_east_asian = !combining && class.east_asian_width.is_east_asian();
        self.prev_unassigned_pictographic = class.extended_pictographic && class.unassigned;
        self.prev = Some(effective);
        self.prev_raw = Some(raw);
    }

    pub(crate) fn pack(&self, p: &mut Packer) {
        p.put_class(self.prev_raw.map(LineClass::index), 6);
        p.put_class(self.prev.map(LineClass::index), 6);
        p.put_class(self.before_spaces.map(LineClass::index), 6);
        p.put_bool(self.ri_odd);
        p.put_bool(self.hebrew_hyphen);
        p.put_bool(self.prev_east_asian);
        p.put_bool(self.prev_unassigned_pictographic);
    }

    pub(crate) fn unpack(u: &mut Unpacker) -> Option<Self> {
        Some(Self {
            prev_raw: u.take_class(6, LineClass::from_index)?,
            prev: u.take_class(6, LineClass::from_index)?,
            before_spaces: u.take_class(6, LineClass::from_index)?,
            ri_odd: u.take_bool(),
            hebrew_hyphen: u.take_bool(),
            prev_east_asian: u.take_bool(),
            prev_unassigned_pictographic: u.take_bool(),
        })
    }
}
