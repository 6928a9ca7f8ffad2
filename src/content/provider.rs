//! The seam between the query layer and wherever content lives.

use std::future::Future;

use super::error::ContentError;
use super::types::{Collection, Entry, Rendered};

/// Source of content collections.
///
/// Implementations load every record of a collection and render a record's
/// heading outline. Faults propagate to the caller untouched.
pub trait ContentProvider: Send + Sync {
    /// All records of collection `D`, in no particular order.
    fn get_collection<D: Collection>(
        &self,
    ) -> impl Future<Output = Result<Vec<Entry<D>>, ContentError>> + Send;

    /// Render one record far enough to know its headings.
    fn render<D: Collection>(
        &self,
        entry: &Entry<D>,
    ) -> impl Future<Output = Result<Rendered, ContentError>> + Send;
}
