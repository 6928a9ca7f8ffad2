//! Tag aggregation over posts and projects.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::content::{Entry, Listed};

/// Tag name to number of entries carrying it.
pub type TagCounts = BTreeMap<String, usize>;

/// One row of the sorted tag view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Add the tags of `entries` to `counts`.
///
/// Tags form a set per entry: a tag repeated in one entry counts once.
pub fn count_tags<'a, D: Listed + 'a>(
    entries: impl IntoIterator<Item = &'a Entry<D>>,
    counts: &mut TagCounts,
) {
    for entry in entries {
        let unique: FxHashSet<&str> = entry.data.tags().iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag.to_owned()).or_default() += 1;
        }
    }
}

/// Most used first; equal counts in ascending tag order.
pub fn sort_tags(counts: &TagCounts) -> Vec<TagCount> {
    let mut sorted: Vec<_> = counts
        .iter()
        .map(|(tag, count)| TagCount {
            tag: tag.clone(),
            count: *count,
        })
        .collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::{post, project};

    #[test]
    fn test_count_tags_across_collections() {
        let posts = vec![
            post("a", "2024-01-01", &["rust", "web"]),
            post("b", "2024-01-02", &["rust"]),
        ];
        let projects = vec![project("p", "2023-01-01", &["web", "cli"])];

        let mut counts = TagCounts::new();
        count_tags(&posts, &mut counts);
        count_tags(&projects, &mut counts);

        assert_eq!(counts["rust"], 2);
        assert_eq!(counts["web"], 2);
        assert_eq!(counts["cli"], 1);

        let pairs: usize = posts.iter().map(|p| p.data.tags.len()).sum::<usize>()
            + projects.iter().map(|p| p.data.tags.len()).sum::<usize>();
        assert_eq!(counts.values().sum::<usize>(), pairs);
    }

    #[test]
    fn test_count_tags_dedupes_within_entry() {
        let posts = vec![post("a", "2024-01-01", &["rust", "rust"])];
        let mut counts = TagCounts::new();
        count_tags(&posts, &mut counts);
        assert_eq!(counts["rust"], 1);
    }

    #[test]
    fn test_sort_tags_by_count_then_name() {
        let counts = TagCounts::from([
            ("zig".to_string(), 2),
            ("astro".to_string(), 1),
            ("rust".to_string(), 3),
            ("go".to_string(), 2),
        ]);
        let tags: Vec<_> = sort_tags(&counts)
            .into_iter()
            .map(|t| (t.tag, t.count))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("rust".to_string(), 3),
                ("go".to_string(), 2),
                ("zig".to_string(), 2),
                ("astro".to_string(), 1),
            ]
        );
    }
}
