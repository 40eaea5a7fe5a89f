//! Word boundary rules (UAX #29, WB1-WB999)

use textseg_props::{Classification, WordClass};

use crate::state::{Packer, Unpacker};
use crate::text::Starved;

/// Extend, Format and ZWJ attach to whatever precedes them (WB4)
#[inline]
fn is_ignorable(class: WordClass) -> bool {
    matches!(class, WordClass::Extend | WordClass::Format | WordClass::ZWJ)
}

#[inline]
fn is_newline(class: WordClass) -> bool {
    matches!(class, WordClass::CR | WordClass::LF | WordClass::Newline)
}

#[inline]
fn is_ahletter(class: WordClass) -> bool {
    matches!(class, WordClass::ALetter | WordClass::HebrewLetter)
}

#[inline]
fn is_mid_letter(class: WordClass) -> bool {
    matches!(
        class,
        WordClass::MidLetter | WordClass::MidNumLet | WordClass::SingleQuote
    )
}

#[inline]
fn is_mid_num(class: WordClass) -> bool {
    matches!(
        class,
        WordClass::MidNum | WordClass::MidNumLet | WordClass::SingleQuote
    )
}

/// Class of the next code point that WB4 does not absorb
fn next_effective<I>(ahead: I) -> Result<Option<WordClass>, Starved>
where
    I: Iterator<Item = Result<Classification, Starved>>,
{
    for class in ahead {
        let word = class?.word;
        if !is_ignorable(word) {
            return Ok(Some(word));
        }
    }
    Ok(None)
}

/// Look-back for the word rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WordRules {
    /// Class of the code point directly before
    prev_raw: Option<WordClass>,
    /// Last class not absorbed by WB4
    last: Option<WordClass>,
    /// The one before `last`
    before_last: Option<WordClass>,
    ri_odd: bool,
}

impl WordRules {
    pub(crate) const BITS: u32 = 5 + 5 + 5 + 1;

    /// Does a word boundary fall before `next`?
    ///
    /// `ahead` yields the code points after `next`.
    pub(crate) fn breaks_before<I>(&self, next: &Classification, ahead: I) -> Result<bool, Starved>
    where
        I: Iterator<Item = Result<Classification, Starved>> + Clone,
    {
        use WordClass::*;

        // WB1
        let Some(prev_raw) = self.prev_raw else {
            return Ok(true);
        };
        let cur = next.word;

        // WB3
        if prev_raw == CR && cur == LF {
            return Ok(false);
        }
        // WB3a, WB3b
        if is_newline(prev_raw) || is_newline(cur) {
            return Ok(true);
        }
        // WB3c
        if prev_raw == ZWJ && next.extended_pictographic {
            return Ok(false);
        }
        // WB3d
        if prev_raw == WSegSpace && cur == WSegSpace {
            return Ok(false);
        }
        // WB4
        if is_ignorable(cur) {
            return Ok(false);
        }

        let Some(last) = self.last else {
            return Ok(true);
        };
        let before_last = self.before_last;

        // WB5
        if is_ahletter(last) && is_ahletter(cur) {
            return Ok(false);
        }
        // WB6
        if is_ahletter(last)
            && is_mid_letter(cur)
            && next_effective(ahead.clone())?.is_some_and(is_ahletter)
        {
            return Ok(false);
        }
        // WB7
        if before_last.is_some_and(is_ahletter) && is_mid_letter(last) && is_ahletter(cur) {
            return Ok(false);
        }
        // WB7a
        if last == HebrewLetter && cur == SingleQuote {
            return Ok(false);
        }
        // WB7b
        if last == HebrewLetter
            && cur == DoubleQuote
            && next_effective(ahead.clone())? == Some(HebrewLetter)
        {
            return Ok(false);
        }
        // WB7c
        if before_last == Some(HebrewLetter) && last == DoubleQuote && cur == HebrewLetter {
            return Ok(false);
        }
        // WB8, WB9, WB10
        if (last == Numeric || is_ahletter(last)) && (cur == Numeric || is_ahletter(cur)) {
            return Ok(false);
        }
        // WB11
        if before_last == Some(Numeric) && is_mid_num(last) && cur == Numeric {
            return Ok(false);
        }
        // WB12
        if last == Numeric && is_mid_num(cur) && next_effective(ahead)? == Some(Numeric) {
            return Ok(false);
        }
        // WB13, WB13a, WB13b
        match (last, cur) {
            (Katakana, Katakana)
            | (ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet)
            | (ExtendNumLet, ALetter | HebrewLetter | Numeric | Katakana) => return Ok(false),
            _ => {}
        }
        // WB15, WB16
        if last == RegionalIndicator && cur == RegionalIndicator && self.ri_odd {
            return Ok(false);
        }
        // WB999
        Ok(true)
    }

    pub(crate) fn push(&mut self, class: &Classification) {
        let class = class.word;
        let absorbed = is_ignorable(class) && self.prev_raw.is_some_and(|p| !is_newline(p));
        self.prev_raw = Some(class);
        if absorbed {
            return;
        }
        self.before_last = self.last;
        self.last = Some(class);
        self.ri_odd = class == WordClass::RegionalIndicator && !self.ri_odd;
    }

    pub(crate) fn pack(&self, p: &mut Packer) {
        p.put_class(self.prev_raw.map(WordClass::index), 5);
        p.put_class(self.last.map(WordClass::index), 5);
        p.put_class(self.before_last.map(WordClass::index), 5);
        p.put_bool(self.ri_odd);
    }

    pub(crate) fn unpack(u: &mut Unpacker) -> Option<Self> {
        Some(Self {
            prev_raw: u.take_class(5, WordClass::from_index)?,
            last: u.take_class(5, WordClass::from_index)?,
            before_last: u.take_class(5, WordClass::from_index)?,
            ri_odd: u.take_bool(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_props::classify;

    /// Word segments, deciding at every code point (no grapheme gating)
    fn words(s: &str) -> Vec<String> {
        let classes: Vec<Classification> = s.chars().map(classify).collect();
        let chars: Vec<char> = s.chars().collect();
        let mut rules = WordRules::default();
        let mut out = Vec::new();
        let mut current = String::new();
        for (i, class) in classes.iter().enumerate() {
            let ahead = classes[i + 1..].iter().copied().map(Ok);
            if i > 0 && rules.breaks_before(class, ahead).unwrap() {
                out.push(std::mem::take(&mut current));
            }
            rules.push(class);
            current.push(chars[i]);
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }

    #[test]
    fn test_letters_and_punctuation() {
        assert_eq!(words("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_mid_letter_needs_letter_after() {
        assert_eq!(words("can't"), vec!["can't"]);
        assert_eq!(words("can' "), vec!["can", "'", " "]);
        assert_eq!(words("e.g"), vec!["e.g"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(words("3.14"), vec!["3.14"]);
        assert_eq!(words("1,000,000"), vec!["1,000,000"]);
        assert_eq!(words("3."), vec!["3", "."]);
        assert_eq!(words("a1"), vec!["a1"]);
    }

    #[test]
    fn test_whitespace_runs_stay_together() {
        assert_eq!(words("a   b"), vec!["a", "   ", "b"]);
        assert_eq!(words("a\r\nb"), vec!["a", "\r\n", "b"]);
    }

    #[test]
    fn test_ignorables_attach() {
        // Format character inside a word does not split it
        assert_eq!(words("a\u{00AD}b"), vec!["a\u{00AD}b"]);
        assert_eq!(words("e\u{0301}x"), vec!["e\u{0301}x"]);
    }

    #[test]
    fn test_katakana_and_extendnumlet() {
        assert_eq!(words("\u{30A2}\u{30A4}"), vec!["\u{30A2}\u{30A4}"]);
        assert_eq!(words("foo_bar"), vec!["foo_bar"]);
    }

    #[test]
    fn test_hebrew_quotes() {
        assert_eq!(words("\u{05D0}\"\u{05D1}"), vec!["\u{05D0}\"\u{05D1}"]);
        assert_eq!(words("\u{05D0}'"), vec!["\u{05D0}'"]);
    }

    #[test]
    fn test_regional_indicators_pair_up() {
        let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
        assert_eq!(words(flags), vec!["\u{1F1E9}\u{1F1EA}", "\u{1F1EB}\u{1F1F7}"]);
    }

    #[test]
    fn test_lookahead_starvation_propagates() {
        let rules = {
            let mut r = WordRules::default();
            r.push(&classify('a'));
            r
        };
        let ahead = std::iter::once(Err(Starved));
        assert_eq!(rules.breaks_before(&classify('\''), ahead), Err(Starved));
    }
}
