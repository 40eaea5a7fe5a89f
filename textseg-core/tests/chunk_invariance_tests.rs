//! Property tests: partition, chunk invariance and input-form agreement

use proptest::prelude::*;
use textseg_core::{
    grapheme_cluster_count, step, step_partial, Boundaries, Graphemes, LineBreak, Progress, State,
};

/// Code points that exercise most rule paths
const INTERESTING: &[char] = &[
    'a', 'Z', '1', '.', ',', '\'', '"', ' ', '\n', '\r', '\t', '!', '?', '(', ')', '-', '_',
    '$', '%', ':', '\u{000B}', '\u{00A0}', '\u{00AD}', '\u{0301}', '\u{05D0}', '\u{0600}',
    '\u{0915}', '\u{0924}', '\u{093C}', '\u{094D}', '\u{0E01}', '\u{0E31}', '\u{1100}',
    '\u{1161}', '\u{11A8}', '\u{200B}', '\u{200D}', '\u{2010}', '\u{2028}', '\u{3002}',
    '\u{30A2}', '\u{30C3}', '\u{4E00}', '\u{AC00}', '\u{FE0F}', '\u{FF08}', '\u{1F1E9}',
    '\u{1F1EA}', '\u{1F308}', '\u{1F3F3}', '\u{1F3FC}', '\u{1F44D}',
];

fn interesting_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(INTERESTING), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![interesting_text(), any::<String>()]
}

/// (end offset, mask bits) for every cluster of a whole-text run
fn whole_run_bytes(text: &[u8]) -> Vec<(usize, u8)> {
    let mut out = Vec::new();
    let mut rest = text;
    let mut state = State::START;
    let mut offset = 0;
    while let Some(s) = step(rest, state) {
        offset += s.segment.len();
        out.push((offset, s.boundaries.bits()));
        rest = s.rest;
        state = s.state;
    }
    out
}

/// Same, feeding `text` in pieces cut at `cuts`
fn chunked_run_bytes(text: &[u8], cuts: &[usize]) -> Vec<(usize, u8)> {
    let mut cuts: Vec<usize> = cuts.iter().map(|c| c % (text.len() + 1)).collect();
    cuts.sort_unstable();
    cuts.push(text.len());

    let mut out = Vec::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut base = 0;
    let mut state = State::START;
    let mut from = 0;
    for (i, &cut) in cuts.iter().enumerate() {
        buffer.extend_from_slice(&text[from..cut]);
        from = cut;
        let at_end = i == cuts.len() - 1;

        let mut pos = 0;
        while let Progress::Cluster(s) = step_partial(&buffer[pos..], state, at_end) {
            pos += s.segment.len();
            out.push((base + pos, s.boundaries.bits()));
            state = s.state;
        }
        buffer.drain(..pos);
        base += pos;
    }
    out
}

proptest! {
    #[test]
    fn prop_segments_partition_the_input(text in any_text()) {
        let mut rebuilt = String::new();
        let mut rest = text.as_str();
        let mut state = State::START;
        while let Some(s) = step(rest, state) {
            prop_assert!(!s.segment.is_empty());
            rebuilt.push_str(s.segment);
            rest = s.rest;
            state = s.state;
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_malformed_bytes_partition(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut rebuilt = Vec::new();
        let mut rest = bytes.as_slice();
        let mut state = State::START;
        while let Some(s) = step(rest, state) {
            prop_assert!(!s.segment.is_empty());
            rebuilt.extend_from_slice(s.segment);
            rest = s.rest;
            state = s.state;
        }
        prop_assert_eq!(rebuilt, bytes);
    }

    #[test]
    fn prop_chunked_input_matches_whole_text(
        text in any_text(),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let bytes = text.as_bytes();
        prop_assert_eq!(chunked_run_bytes(bytes, &cuts), whole_run_bytes(bytes));
    }

    #[test]
    fn prop_chunked_malformed_input_matches_whole_text(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        prop_assert_eq!(chunked_run_bytes(&bytes, &cuts), whole_run_bytes(&bytes));
    }

    #[test]
    fn prop_resuming_at_cluster_boundary(text in interesting_text(), pick in any::<usize>()) {
        let whole = whole_run_bytes(text.as_bytes());
        prop_assume!(!whole.is_empty());
        let k = pick % whole.len();

        // Run up to the k-th boundary, then start over on the tail alone
        let mut rest = text.as_str();
        let mut state = State::START;
        for _ in 0..=k {
            let s = step(rest, state).unwrap();
            rest = s.rest;
            state = s.state;
        }
        let tail = rest.to_owned();
        let base = text.len() - tail.len();
        let resumed: Vec<(usize, u8)> = whole_run_from(&tail, state)
            .into_iter()
            .map(|(end, bits)| (base + end, bits))
            .collect();
        prop_assert_eq!(resumed, whole[k + 1..].to_vec());
    }

    #[test]
    fn prop_input_forms_agree(text in any_text()) {
        let chars: Vec<char> = text.chars().collect();

        let from_str: Vec<Vec<char>> = Graphemes::new(text.as_str())
            .map(|c: &str| c.chars().collect())
            .collect();
        let from_bytes: Vec<Vec<char>> = Graphemes::new(text.as_bytes())
            .map(|c: &[u8]| String::from_utf8_lossy(c).chars().collect())
            .collect();
        let from_chars: Vec<Vec<char>> = Graphemes::new(chars.as_slice())
            .map(<[char]>::to_vec)
            .collect();

        prop_assert_eq!(&from_str, &from_bytes);
        prop_assert_eq!(&from_str, &from_chars);
        prop_assert_eq!(grapheme_cluster_count(text.as_str()), grapheme_cluster_count(chars.as_slice()));
    }

    #[test]
    fn prop_mandatory_break_is_word_and_sentence_boundary(text in interesting_text()) {
        let mut g = Graphemes::new(text.as_str());
        while g.advance() {
            if g.line_break() == LineBreak::MustBreak {
                prop_assert!(g.is_word_boundary());
                prop_assert!(g.is_sentence_boundary());
            }
        }
    }

    #[test]
    fn prop_last_boundary_is_end_of_text(text in any_text()) {
        let whole = whole_run_bytes(text.as_bytes());
        if let Some(&(end, bits)) = whole.last() {
            prop_assert_eq!(end, text.len());
            prop_assert_eq!(bits, Boundaries::END_OF_TEXT.bits());
        }
    }
}

fn whole_run_from(text: &str, mut state: State) -> Vec<(usize, u8)> {
    let mut out = Vec::new();
    let mut rest = text;
    let mut offset = 0;
    while let Some(s) = step(rest, state) {
        offset += s.segment.len();
        out.push((offset, s.boundaries.bits()));
        rest = s.rest;
        state = s.state;
    }
    out
}
