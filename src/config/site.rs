//! `[site]` section configuration.
//!
//! Metadata shown in page heads and the listing sizes of the home and blog
//! pages.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml.
///
/// # Example
/// ```toml
/// [site]
/// title = "Jane Doe"
/// description = "Notes on systems and craft"
/// href = "https://jane.dev"
/// author = "jane"
/// posts_per_page = 5
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Canonical site URL.
    #[serde(default = "defaults::site::href")]
    #[educe(Default = defaults::site::href())]
    pub href: String,

    /// Default author id.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// BCP 47 language tag.
    #[serde(default = "defaults::site::locale")]
    #[educe(Default = defaults::site::locale())]
    pub locale: String,

    /// Posts shown on the home page.
    #[serde(default = "defaults::site::featured_post_count")]
    #[educe(Default = defaults::site::featured_post_count())]
    pub featured_post_count: usize,

    /// Page size of the paginated blog listing.
    #[serde(default = "defaults::site::posts_per_page")]
    #[educe(Default = defaults::site::posts_per_page())]
    pub posts_per_page: usize,

    /// Craft items shown on the home page.
    #[serde(default = "defaults::site::featured_craft_count")]
    #[educe(Default = defaults::site::featured_craft_count())]
    pub featured_craft_count: usize,
}
