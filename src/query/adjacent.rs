//! Previous/next navigation.
//!
//! Lists are ordered newest first, so the entry before the current one is
//! `newer` and the entry after it is `older`.

use serde::Serialize;

use crate::content::{Entry, PostEntry};

/// Neighbours of an entry within an ordered list.
#[derive(Debug, Clone, Serialize)]
pub struct Adjacent<T> {
    pub newer: Option<T>,
    pub older: Option<T>,
}

impl<T> Default for Adjacent<T> {
    fn default() -> Self {
        Self {
            newer: None,
            older: None,
        }
    }
}

/// Neighbours of a post, plus its parent when it is a subpost.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostNeighbors {
    pub newer: Option<PostEntry>,
    pub older: Option<PostEntry>,
    pub parent: Option<PostEntry>,
}

impl PostNeighbors {
    pub fn new(adjacent: Adjacent<PostEntry>, parent: Option<PostEntry>) -> Self {
        Self {
            newer: adjacent.newer,
            older: adjacent.older,
            parent,
        }
    }
}

/// Find `current_id` in `items` and return its immediate neighbours.
///
/// Both neighbours are `None` when the id is not in the list.
pub fn adjacent<D: Clone>(items: &[Entry<D>], current_id: &str) -> Adjacent<Entry<D>> {
    let Some(index) = items.iter().position(|item| item.id == current_id) else {
        return Adjacent::default();
    };

    Adjacent {
        newer: index.checked_sub(1).and_then(|i| items.get(i)).cloned(),
        older: items.get(index + 1).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::post;

    fn ids(adj: &Adjacent<PostEntry>) -> (Option<&str>, Option<&str>) {
        (
            adj.newer.as_ref().map(|p| p.id.as_str()),
            adj.older.as_ref().map(|p| p.id.as_str()),
        )
    }

    #[test]
    fn test_adjacent_positions() {
        let items = vec![
            post("c", "2024-03-01", &[]),
            post("b", "2024-02-01", &[]),
            post("a", "2024-01-01", &[]),
        ];

        assert_eq!(ids(&adjacent(&items, "c")), (None, Some("b")));
        assert_eq!(ids(&adjacent(&items, "b")), (Some("c"), Some("a")));
        assert_eq!(ids(&adjacent(&items, "a")), (Some("b"), None));
    }

    #[test]
    fn test_adjacent_missing_or_single() {
        let items = vec![post("only", "2024-01-01", &[])];
        assert_eq!(ids(&adjacent(&items, "missing")), (None, None));
        assert_eq!(ids(&adjacent(&items, "only")), (None, None));
        assert_eq!(ids(&adjacent(&[], "x")), (None, None));
    }
}
