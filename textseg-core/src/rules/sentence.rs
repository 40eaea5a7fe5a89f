//! Sentence boundary rules (UAX #29, SB1-SB998)

use textseg_props::{Classification, SentenceClass};

use crate::state::{Packer, Unpacker};
use crate::text::Starved;

#[inline]
fn is_para_sep(class: SentenceClass) -> bool {
    matches!(
        class,
        SentenceClass::Sep | SentenceClass::CR | SentenceClass::LF
    )
}

#[inline]
fn is_ignorable(class: SentenceClass) -> bool {
    matches!(class, SentenceClass::Extend | SentenceClass::Format)
}

/// Terminator that opened the current `SATerm Close* Sp*` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    ATerm,
    STerm,
}

/// Position inside the `SATerm Close* Sp*` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Term,
    Close,
    Sp,
}

/// Look-back for the sentence rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SentenceRules {
    /// Class of the code point directly before
    prev_raw: Option<SentenceClass>,
    /// Last class not absorbed by SB5
    last: Option<SentenceClass>,
    /// Inside a `SATerm Close* Sp*` run
    terminator: Option<Terminator>,
    phase: Phase,
    /// `(Upper | Lower) ATerm` (SB7)
    cased_before_aterm: bool,
}

impl SentenceRules {
    pub(crate) const BITS: u32 = 4 + 4 + 2 + 2 + 1;

    /// Does a sentence boundary fall before `next`?
    ///
    /// `ahead` yields the code points after `next`; only SB8 reads it.
    pub(crate) fn breaks_before<I>(&self, next: &Classification, ahead: I) -> Result<bool, Starved>
    where
        I: Iterator<Item = Result<Classification, Starved>>,
    {
        use SentenceClass::*;

        // SB1
        let Some(prev_raw) = self.prev_raw else {
            return Ok(true);
        };
        let cur = next.sentence;

        // SB3
        if prev_raw == CR && cur == LF {
            return Ok(false);
        }
        // SB4
        if is_para_sep(prev_raw) {
            return Ok(true);
        }
        // SB5
        if is_ignorable(cur) {
            return Ok(false);
        }
        // SB6
        if self.last == Some(ATerm) && cur == Numeric {
            return Ok(false);
        }
        // SB7
        if self.last == Some(ATerm) && self.cased_before_aterm && cur == Upper {
            return Ok(false);
        }

        let Some(terminator) = self.terminator else {
            // SB998
            return Ok(false);
        };

        // SB8a
        if matches!(cur, SContinue | STerm | ATerm) {
            return Ok(false);
        }
        // SB9
        if self.phase != Phase::Sp && matches!(cur, Close | Sp | Sep | CR | LF) {
            return Ok(false);
        }
        // SB10
        if matches!(cur, Sp | Sep | CR | LF) {
            return Ok(false);
        }
        // SB8, checked after the cheaper rules since they agree on "no break"
        if terminator == Terminator::ATerm && lower_follows(next, ahead)? {
            return Ok(false);
        }
        // SB11
        Ok(true)
    }

    pub(crate) fn push(&mut self, class: &Classification) {
        use SentenceClass::*;

        let class = class.sentence;
        let absorbed = is_ignorable(class) && self.prev_raw.is_some_and(|p| !is_para_sep(p));
        self.prev_raw = Some(class);
        if absorbed {
            return;
        }

        match class {
            ATerm => {
                self.cased_before_aterm = matches!(self.last, Some(Upper | Lower));
                self.terminator = Some(Terminator::ATerm);
                self.phase = Phase::Term;
            }
            STerm => {
                self.terminator = Some(Terminator::STerm);
                self.phase = Phase::Term;
            }
            Close if self.terminator.is_some() && self.phase != Phase::Sp => {
                self.phase = Phase::Close;
            }
            Sp if self.terminator.is_some() => {
                self.phase = Phase::Sp;
            }
            _ => {
                self.terminator = None;
                self.phase = Phase::Term;
            }
        }
        self.last = Some(class);
    }

    pub(crate) fn pack(&self, p: &mut Packer) {
        p.put_class(self.prev_raw.map(SentenceClass::index), 4);
        p.put_class(self.last.map(SentenceClass::index), 4);
        p.put(
            match self.terminator {
                None => 0,
                Some(Terminator::ATerm) => 1,
                Some(Terminator::STerm) => 2,
            },
            2,
        );
        p.put(self.phase as u64, 2);
        p.put_bool(self.cased_before_aterm);
    }

    pub(crate) fn unpack(u: &mut Unpacker) -> Option<Self> {
        let prev_raw = u.take_class(4, SentenceClass::from_index)?;
        let last = u.take_class(4, SentenceClass::from_index)?;
        let terminator = match u.take(2) {
            0 => None,
            1 => Some(Terminator::ATerm),
            2 => Some(Terminator::STerm),
            _ => return None,
        };
        let phase = match u.take(2) {
            0 => Phase::Term,
            1 => Phase::Close,
            2 => Phase::Sp,
            _ => return None,
        };
        Some(Self {
            prev_raw,
            last,
            terminator,
            phase,
            cased_before_aterm: u.take_bool(),
        })
    }
}

/// SB8: `ATerm Close* Sp* × (¬(OLetter | Upper | Lower | ParaSep | SATerm))* Lower`
///
/// Scans from `next` onwards for the first code point that settles the rule.
fn lower_follows<I>(next: &Classification, ahead: I) -> Result<bool, Starved>
where
    I: Iterator<Item = Result<Classification, Starved>>,
{
    use SentenceClass::*;

    for class in core::iter::once(Ok(*next)).chain(ahead) {
        match class?.sentence {
            Lower => return Ok(true),
            OLetter | Upper | Sep | CR | LF | STerm | ATerm => return Ok(false),
            _ => {}
        }
    }
    Ok(false)
}
