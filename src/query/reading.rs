//! Reading time estimates.

use std::fmt;

use serde::{Serialize, Serializer};

/// Average reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time of a body of text.
///
/// Ordered by word count first, so more words always compare greater even
/// when both round to the same number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: usize,
}

impl ReadingTime {
    /// Estimate from a word count. Anything shorter than a minute reads as one.
    pub fn from_words(words: usize) -> Self {
        Self {
            words,
            minutes: words.div_ceil(WORDS_PER_MINUTE).max(1),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Serialized as the display string, e.g. `"3 min read"`.
impl Serialize for ReadingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
