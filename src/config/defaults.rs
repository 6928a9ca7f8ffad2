//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "<YOUR_SITE>".into()
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn href() -> String {
        "https://example.com".into()
    }

    pub fn locale() -> String {
        "en-US".into()
    }

    pub fn featured_post_count() -> usize {
        2
    }

    pub fn posts_per_page() -> usize {
        3
    }

    pub fn featured_craft_count() -> usize {
        8
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn default_avatar() -> String {
        crate::query::DEFAULT_AVATAR.into()
    }
}

// ============================================================================
// Link Defaults
// ============================================================================

pub mod links {
    use super::super::links::Link;

    pub fn nav() -> Vec<Link> {
        ["blog", "projects", "craft", "tags"]
            .into_iter()
            .map(|label| Link {
                href: format!("/{label}"),
                label: label.into(),
            })
            .collect()
    }
}
