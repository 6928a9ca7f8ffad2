//! Page splitting for list views.

use serde::Serialize;

/// One page of a list. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current: usize,
    /// Number of the last page (at least 1, even for an empty list).
    pub last: usize,
    /// Total number of items across all pages.
    pub total: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Cut page `page` out of `items`, `per_page` items at a time.
///
/// `per_page` is clamped to at least 1. Pages past the end are empty but
/// still report the correct totals.
pub fn paginate<T: Clone>(items: &[T], per_page: usize, page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = items.len();
    let last = total.div_ceil(per_page).max(1);

    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    Page {
        items: items[start..end].to_vec(),
        current: page,
        last,
        total,
        prev: (page > 1).then(|| (page - 1).min(last)),
        next: (page < last).then_some(page + 1),
    }
}
