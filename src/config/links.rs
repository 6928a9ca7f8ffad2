//! Navigation, social links, icons and tech stack.

use serde::{Deserialize, Serialize};

/// `[[nav]]` / `[[social]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// `[[tech]]` entry shown in the stack section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tech {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    pub icon: String,

    /// CSS color used on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
}
