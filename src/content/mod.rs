//! Content records and the providers that load them.
//!
//! # Data Flow
//!
//! ```text
//! ┌──────────────┐   get_collection::<D>()   ┌──────────────────────┐
//! │  FsProvider  │ ────────────────────────► │ Vec<Entry<D>>        │
//! │ (content/)   │                           │ id + front matter    │
//! └──────────────┘                           │ + raw body           │
//!        │                                   └──────────────────────┘
//!        │ render(&entry)
//!        ▼
//!   Rendered { headings }
//! ```
//!
//! Collections: `blog` ([`PostData`]), `craft` ([`CraftData`]),
//! `projects` ([`ProjectData`]) and `authors` ([`AuthorData`]).

mod error;
mod frontmatter;
mod fs;
pub mod id;
pub mod markdown;
#[cfg(test)]
pub mod memory;
mod provider;
mod types;

pub use error::ContentError;
pub use fs::FsProvider;
pub use provider::ContentProvider;
pub use types::{
    AuthorData, AuthorEntry, CraftData, CraftEntry, Entry, Heading, Listed, PostData, PostEntry,
    ProjectData, ProjectEntry,
};
