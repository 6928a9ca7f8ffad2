//! `[build]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - where content lives.
///
/// # Example
/// ```toml
/// [build]
/// content = "src/content"
/// default_avatar = "/avatars/anon.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root, set from the CLI.
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Content directory holding `blog/`, `craft/`, `projects/`, `authors/`.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Avatar for authors without a profile.
    #[serde(default = "defaults::build::default_avatar")]
    #[educe(Default = defaults::build::default_avatar())]
    pub default_avatar: String,
}
