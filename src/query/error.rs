//! Query error types.

use thiserror::Error;

use crate::content::ContentError;

/// Faults surfaced by the query layer.
///
/// Unknown ids are not errors: lookups return `None` or empty views.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("cache key `{key}` already holds a value of another type")]
    CacheType { key: String },
}
