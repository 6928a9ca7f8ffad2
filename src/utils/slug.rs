//! Heading slugification.
//!
//! Converts heading text to URL fragment ids the way GitHub-flavoured
//! markdown renderers do, so TOC links match rendered anchors.

use rustc_hash::FxHashMap;

/// Convert heading text to a fragment id.
///
/// Lowercases, drops punctuation and turns each space into a hyphen.
/// Letters and digits from any script are kept.
pub fn slugify_fragment(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Generates unique slugs within one document.
///
/// Repeated headings get `-1`, `-2`, ... appended, in order of appearance.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: FxHashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text`, disambiguating against slugs issued earlier.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify_fragment(text);
        if !self.seen.contains_key(&base) {
            self.seen.insert(base.clone(), 0);
            return base;
        }

        let candidate = loop {
            let count = self.seen.entry(base.clone()).or_default();
            *count += 1;
            let candidate = format!("{base}-{count}");
            if !self.seen.contains_key(&candidate) {
                break candidate;
            }
        };
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}
