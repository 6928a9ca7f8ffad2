//! Parent/child identifier convention.
//!
//! A subpost is any entry whose id contains [`SUBPOST_SEPARATOR`]; the part
//! before the first separator is its parent's id. Every caller goes through
//! these helpers, never through the separator directly.

/// Separator between a parent id and a subpost name (`parent/child`).
pub const SUBPOST_SEPARATOR: char = '/';

/// Whether `id` names a subpost.
#[inline]
pub fn is_subpost(id: &str) -> bool {
    id.contains(SUBPOST_SEPARATOR)
}

/// Parent id of a subpost. For a top-level id this is the id itself.
#[inline]
pub fn parent_id(id: &str) -> &str {
    id.split(SUBPOST_SEPARATOR).next().unwrap_or(id)
}
