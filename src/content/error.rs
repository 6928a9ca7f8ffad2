//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Faults raised while reading or parsing a content collection.
///
/// Absence of data is never reported here; lookups return `None` instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory")]
    Walk(#[from] walkdir::Error),

    #[error("`{0}` has no `+++` front matter block")]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in `{path}`")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("collection loader task failed")]
    Task(#[from] tokio::task::JoinError),
}
