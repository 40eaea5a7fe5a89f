//! Aggregate helpers built on the cursor

use textseg_props::classify;

use crate::cursor::Graphemes;
use crate::text::Text;

/// Number of extended grapheme clusters
///
/// # Example
///
/// ```rust
/// use textseg_core::grapheme_cluster_count;
///
/// // 🇩🇪🏳️‍🌈
/// assert_eq!(grapheme_cluster_count("\u{1F1E9}\u{1F1EA}\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), 2);
/// ```
pub fn grapheme_cluster_count<T: Text + ?Sized>(text: &T) -> usize {
    Graphemes::new(text).count()
}

/// Number of word segments, punctuation and whitespace runs included
pub fn word_count<T: Text + ?Sized>(text: &T) -> usize {
    count_where(text, Graphemes::is_word_boundary)
}

/// Number of sentences
pub fn sentence_count<T: Text + ?Sized>(text: &T) -> usize {
    count_where(text, Graphemes::is_sentence_boundary)
}

fn count_where<'a, T, F>(text: &'a T, is_boundary: F) -> usize
where
    T: Text + ?Sized,
    F: Fn(&Graphemes<'a, T>) -> bool,
{
    let mut cursor = Graphemes::new(text);
    let mut count = 0;
    while cursor.advance() {
        if is_boundary(&cursor) {
            count += 1;
        }
    }
    count
}

/// Reverse a string cluster by cluster
///
/// Combining marks, emoji sequences and flags stay intact.
pub fn reverse_graphemes(text: &str) -> String {
    let mut clusters: Vec<&str> = Graphemes::new(text).collect();
    clusters.reverse();
    clusters.concat()
}

/// Does the text end in a mandatory line break character (BK, CR, LF, NL)?
pub fn has_trailing_line_break<T: Text + ?Sized>(text: &T) -> bool {
    text.last_code_point()
        .is_some_and(|ch| classify(ch).line.is_hard_break())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(grapheme_cluster_count(""), 0);
        assert_eq!(grapheme_cluster_count("e\u{0301}"), 1);
        assert_eq!(word_count("Hello, world!"), 5);
        assert_eq!(word_count(""), 0);
        assert_eq!(sentence_count("One. Two? Three!"), 3);
        assert_eq!(sentence_count("no terminator"), 1);
    }

    #[test]
    fn test_reverse_keeps_clusters() {
        assert_eq!(reverse_graphemes("ab\u{0301}c"), "cb\u{0301}a");
        assert_eq!(
            reverse_graphemes("\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}"),
            "\u{1F1EB}\u{1F1F7}\u{1F1E9}\u{1F1EA}"
        );
        assert_eq!(reverse_graphemes(""), "");
    }

    #[test]
    fn test_trailing_line_break() {
        assert!(has_trailing_line_break("line\n"));
        assert!(has_trailing_line_break("line\r"));
        assert!(has_trailing_line_break("line\u{2028}"));
        assert!(has_trailing_line_break("line\u{0085}".as_bytes()));
        assert!(!has_trailing_line_break("line"));
        assert!(!has_trailing_line_break("line\n "));
        assert!(!has_trailing_line_break(""));
    }
}
