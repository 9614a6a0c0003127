//! Line, word and character counting, after the Unix `wc` utility.
//!
//! Lines are the pieces produced by splitting on `\n`, so text ending in a
//! newline counts one more (empty) line than `wc -l` would. Characters are
//! Unicode scalar values and exclude the newlines themselves.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl From<Counts> for (usize, usize, usize) {
    fn from(counts: Counts) -> Self {
        (counts.lines, counts.words, counts.chars)
    }
}

impl Display for Counts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lines: {}, Words: {}, Characters: {}",
            self.lines, self.words, self.chars
        )
    }
}

/// Counts lines, whitespace separated words and characters in `text`.
///
/// # Examples
///
/// ```
/// use unixtools_core::count::wc;
///
/// assert_eq!(<(usize, usize, usize)>::from(wc("")), (1, 0, 0));
/// ```
pub fn wc(text: &str) -> Counts {
    text.split('\n').fold(Counts::default(), |counts, line| Counts {
        lines: counts.lines + 1,
        words: counts.words + line.split_whitespace().count(),
        chars: counts.chars + line.chars().count(),
    })
}
