//! Reusable filters and orderings over [`Listed`] entries.

use std::cmp::Ordering;

use crate::content::{Entry, Listed, id};

// ============================================================================
// Filters
// ============================================================================

/// Keep entries not marked as drafts.
pub fn not_draft<D: Listed>(entry: &Entry<D>) -> bool {
    !entry.data.is_draft()
}

/// Keep top-level entries only.
pub fn not_subpost<D>(entry: &Entry<D>) -> bool {
    !id::is_subpost(&entry.id)
}

/// Neither a draft nor a subpost.
pub fn published<D: Listed>(entry: &Entry<D>) -> bool {
    not_draft(entry) && not_subpost(entry)
}

/// Entry lists `tag` among its tags.
pub fn has_tag<D: Listed>(entry: &Entry<D>, tag: &str) -> bool {
    entry.data.tags().iter().any(|t| t == tag)
}

/// Entry lists `author` among its authors.
pub fn has_author<D: Listed>(entry: &Entry<D>, author: &str) -> bool {
    entry.data.authors().iter().any(|a| a == author)
}

// ============================================================================
// Orderings
// ============================================================================

/// Newest first by sort date (`date`, or `start_date` for projects).
///
/// Ties keep their input order when used with a stable sort.
pub fn by_date<D: Listed>(a: &Entry<D>, b: &Entry<D>) -> Ordering {
    b.data.sort_date().cmp(&a.data.sort_date())
}

/// Reading order within a series: oldest first, then by explicit `order`.
pub fn by_subpost_order<D: Listed>(a: &Entry<D>, b: &Entry<D>) -> Ordering {
    a.data
        .sort_date()
        .cmp(&b.data.sort_date())
        .then_with(|| a.data.order().cmp(&b.data.order()))
}

// ============================================================================
// Pipelines
// ============================================================================

/// Filter then stable-sort a collection.
pub fn filter_sorted<D>(
    entries: Vec<Entry<D>>,
    keep: impl Fn(&Entry<D>) -> bool,
    order: impl Fn(&Entry<D>, &Entry<D>) -> Ordering,
) -> Vec<Entry<D>> {
    let mut entries: Vec<_> = entries.into_iter().filter(|e| keep(e)).collect();
    entries.sort_by(|a, b| order(a, b));
    entries
}
