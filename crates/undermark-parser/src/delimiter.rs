//! Delimiter run classification.
//!
//! All whitespace and digit policy for underscores lives here; the marker
//! processor only looks at the booleans these functions return.

use crate::escape::ScanChar;

/// The only delimiter character.
pub const UNDERSCORE: char = '_';

/// Stand-in for the character before the start or after the end of a block.
const BOUNDARY: char = ' ';

/// Which kind of span a delimiter token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `__`
    Strong,
    /// `_`
    Emphasis,
}

impl Marker {
    /// Classify the token at the start of a run with `run` delimiters left.
    ///
    /// Longer runs are consumed two at a time.
    pub fn for_run(run: usize) -> Self {
        if run >= 2 {
            Marker::Strong
        } else {
            Marker::Emphasis
        }
    }

    /// Number of characters the token consumes.
    pub fn char_len(&self) -> usize {
        match self {
            Marker::Strong => 2,
            Marker::Emphasis => 1,
        }
    }

    /// The literal markup, used when the token degrades to text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Strong => "__",
            Marker::Emphasis => "_",
        }
    }
}

/// Whether a run is being tested as an opener or a closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flank {
    Open,
    Close,
}

/// Number of consecutive unescaped underscores starting at `pos`.
pub fn run_length(text: &[ScanChar], pos: usize) -> usize {
    text.get(pos..)
        .map(|rest| rest.iter().take_while(|c| c.is_delimiter()).count())
        .unwrap_or(0)
}

/// Character immediately before `pos`, or a space at the start.
pub fn prev_char(text: &[ScanChar], pos: usize) -> char {
    pos.checked_sub(1)
        .and_then(|i| text.get(i))
        .map_or(BOUNDARY, |c| c.ch)
}

/// Character immediately after a run of `length` at `pos`, or a space at the end.
pub fn next_char(text: &[ScanChar], pos: usize, length: usize) -> char {
    text.get(pos + length).map_or(BOUNDARY, |c| c.ch)
}

/// Letters and digits count as word characters.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

#[inline]
fn is_digit(ch: char) -> bool {
    ch.is_numeric()
}

/// Whether the run of `length` at `pos` may open (or close) a span.
///
/// An opener must not be followed by whitespace, a closer must not be
/// preceded by whitespace, and a run squeezed between two digits is never
/// markup.
pub fn can_open_or_close(text: &[ScanChar], pos: usize, length: usize, flank: Flank) -> bool {
    let prev = prev_char(text, pos);
    let next = next_char(text, pos, length);

    let blocked_by_space = match flank {
        Flank::Open => next.is_whitespace(),
        Flank::Close => prev.is_whitespace(),
    };

    !blocked_by_space && !(is_digit(prev) && is_digit(next))
}

/// A span that starts inside one word and ends inside another word.
pub fn crosses_words(opened_inside_word: bool, closing_inside_word: bool, saw_whitespace: bool) -> bool {
    opened_inside_word && closing_inside_word && saw_whitespace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::preprocess;

    #[test]
    fn test_run_length() {
        let text = preprocess("a___b_");
        assert_eq!(run_length(&text, 0), 0);
        assert_eq!(run_length(&text, 1), 3);
        assert_eq!(run_length(&text, 2), 2);
        assert_eq!(run_length(&text, 5), 1);
        assert_eq!(run_length(&text, 6), 0);
    }

    #[test]
    fn test_run_length_stops_at_escape() {
        let text = preprocess(r"_\__");
        assert_eq!(run_length(&text, 0), 1);
        assert_eq!(run_length(&text, 2), 1);
    }

    #[test]
    fn test_marker_for_run() {
        assert_eq!(Marker::for_run(1), Marker::Emphasis);
        assert_eq!(Marker::for_run(2), Marker::Strong);
        assert_eq!(Marker::for_run(4), Marker::Strong);
        assert_eq!(Marker::Strong.as_str().len(), Marker::Strong.char_len());
    }

    #[test]
    fn test_boundaries_read_as_space() {
        let text = preprocess("_a_");
        assert_eq!(prev_char(&text, 0), ' ');
        assert_eq!(next_char(&text, 2, 1), ' ');
        assert_eq!(next_char(&text, 0, 1), 'a');
    }

    #[test]
    fn test_open_needs_non_space_after() {
        let text = preprocess("a _ b");
        assert!(!can_open_or_close(&text, 2, 1, Flank::Open));
        let text = preprocess("a _b");
        assert!(can_open_or_close(&text, 2, 1, Flank::Open));
    }

    #[test]
    fn test_close_needs_non_space_before() {
        let text = preprocess("b _");
        assert!(!can_open_or_close(&text, 2, 1, Flank::Close));
        let text = preprocess("b_ ");
        assert!(can_open_or_close(&text, 1, 1, Flank::Close));
    }

    #[test]
    fn test_between_digits_is_never_markup() {
        let text = preprocess("1_2");
        assert!(!can_open_or_close(&text, 1, 1, Flank::Open));
        assert!(!can_open_or_close(&text, 1, 1, Flank::Close));

        let text = preprocess("1__2");
        assert!(!can_open_or_close(&text, 1, 2, Flank::Open));
    }

    #[test]
    fn test_digit_on_one_side_only() {
        let text = preprocess("a_2");
        assert!(can_open_or_close(&text, 1, 1, Flank::Open));
    }

    #[test]
    fn test_numeric_class_is_unicode_wide() {
        // Superscripts and vulgar fractions are numeric too.
        let text = preprocess("²_½");
        assert!(!can_open_or_close(&text, 1, 1, Flank::Open));
        assert!(!can_open_or_close(&text, 1, 1, Flank::Close));
        assert!(is_word_char('²'));
        assert!(is_word_char('½'));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Ж'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('_'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn test_crosses_words() {
        assert!(crosses_words(true, true, true));
        assert!(!crosses_words(false, true, true));
        assert!(!crosses_words(true, false, true));
        assert!(!crosses_words(true, true, false));
    }
}
