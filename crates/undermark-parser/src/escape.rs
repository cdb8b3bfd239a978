//! Backslash escape preprocessing.
//!
//! Escapes are resolved before the emphasis scan. Instead of rewriting
//! escaped characters into sentinel codepoints, every character carries an
//! `escaped` flag, so no input character is ever reserved.
//!
//! Rules:
//! - `\_`, `\#` and `\\` followed by `_` or `#` escape one character
//! - in the `\\` case only the pair is consumed; the `_`/`#` after it is
//!   scanned again as an ordinary character
//! - `\\` followed by anything else stays as two literal backslashes
//! - any other `\` is left in place together with the following character

use crate::delimiter::UNDERSCORE;

/// The escape character.
pub const ESCAPE: char = '\\';

/// The heading marker, escapable so a paragraph can start with `#`.
pub const HASH: char = '#';

/// A character as seen by the emphasis scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanChar {
    /// The character itself (an escaped `\_` is stored as `_`)
    pub ch: char,
    /// Whether a backslash escape produced this character
    pub escaped: bool,
}

impl ScanChar {
    pub fn plain(ch: char) -> Self {
        Self { ch, escaped: false }
    }

    pub fn escaped(ch: char) -> Self {
        Self { ch, escaped: true }
    }

    /// Whether the scanner may treat this character as part of a delimiter run.
    #[inline]
    pub fn is_delimiter(&self) -> bool {
        !self.escaped && self.ch == UNDERSCORE
    }
}

fn is_escapable(ch: char) -> bool {
    ch == UNDERSCORE || ch == HASH
}

/// Resolve backslash escapes in `text`.
///
/// The result never has more characters than `text`.
pub fn preprocess(text: &str) -> Vec<ScanChar> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch != ESCAPE {
            out.push(ScanChar::plain(ch));
            i += 1;
            continue;
        }

        match chars.get(i + 1).copied() {
            Some(next) if is_escapable(next) => {
                out.push(ScanChar::escaped(next));
                i += 2;
            }
            Some(ESCAPE) => {
                if chars.get(i + 2).is_some_and(|&after| is_escapable(after)) {
                    out.push(ScanChar::escaped(ESCAPE));
                } else {
                    out.push(ScanChar::plain(ESCAPE));
                    out.push(ScanChar::plain(ESCAPE));
                }
                i += 2;
            }
            // Lone backslash, or one that escapes nothing
            _ => {
                out.push(ScanChar::plain(ESCAPE));
                i += 1;
            }
        }
    }

    out
}
