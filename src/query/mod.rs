//! Content query layer.
//!
//! Loads collections through a memo cache and derives the views page
//! templates need.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────┐    ┌──────────────────────────┐
//! │ ContentProvider  │──► │  MemoCache   │──► │ filter/sort pipelines    │
//! │ get_collection() │    │ (per key,    │    │ published / not_draft    │
//! │ render()         │    │ single-flight)│   │ by_date / by_subpost_order│
//! └──────────────────┘    └──────────────┘    └────────────┬─────────────┘
//!                                                          │
//!        ┌─────────────┬──────────────┬─────────────┬──────┴──────┐
//!        ▼             ▼              ▼             ▼             ▼
//!    adjacency       tags         subposts      authors        TOC / reading time
//! ```
//!
//! Everything here is read-only: entries are immutable snapshots for the
//! lifetime of one [`ContentQuery`].

pub mod adjacent;
pub mod authors;
mod cache;
mod error;
pub mod filter;
pub mod group;
pub mod paginate;
pub mod reading;
mod store;
pub mod tags;
pub mod toc;

pub use error::QueryError;
pub use group::group_by_year;
pub use paginate::{Page, paginate};
pub use store::{ContentQuery, DEFAULT_AVATAR};
