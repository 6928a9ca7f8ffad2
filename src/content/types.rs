//! Content records.
//!
//! Each collection has its own payload type; the shared [`Listed`] interface
//! lets filters and sorters work over any of them without shape guessing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::id;

/// A record of one collection: its id, typed front matter and raw body.
#[derive(Debug, Clone, Serialize)]
pub struct Entry<D> {
    /// Path-like id relative to the collection directory (e.g. `"rust/intro"`).
    pub id: String,

    /// Front matter payload.
    pub data: D,

    /// Raw markdown body, used for word counts and heading extraction.
    #[serde(skip)]
    pub body: String,
}

impl<D> Entry<D> {
    pub fn new(id: impl Into<String>, data: D, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data,
            body: body.into(),
        }
    }

    pub fn is_subpost(&self) -> bool {
        id::is_subpost(&self.id)
    }

    /// Parent id, or the entry's own id when it is not a subpost.
    pub fn parent_id(&self) -> &str {
        id::parent_id(&self.id)
    }
}

impl<D: Listed> Entry<D> {
    /// Calendar year of the entry's sort date.
    pub fn year(&self) -> i32 {
        self.data.sort_date().year()
    }
}

/// A named content collection and the payload type its files deserialize into.
pub trait Collection: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Directory name under the content root.
    const NAME: &'static str;
}

/// Fields shared by every listable collection (posts, crafts, projects).
pub trait Listed {
    fn is_draft(&self) -> bool;
    fn tags(&self) -> &[String];

    /// Date used for ordering: `date` for posts and crafts, `start_date` for projects.
    fn sort_date(&self) -> NaiveDate;

    fn authors(&self) -> &[String] {
        &[]
    }

    /// Explicit position among siblings sharing a date.
    fn order(&self) -> i64 {
        0
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Front matter of a blog post or subpost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "toml_date::deserialize")]
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    /// Sequencing among subposts that share a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Collection for PostData {
    const NAME: &'static str = "blog";
}

impl Listed for PostData {
    fn is_draft(&self) -> bool {
        self.draft
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn sort_date(&self) -> NaiveDate {
        self.date
    }
    fn authors(&self) -> &[String] {
        &self.authors
    }
    fn order(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

// ============================================================================
// Craft
// ============================================================================

/// Front matter of a craft item (small experiments, snippets, demos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftData {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "toml_date::deserialize")]
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Collection for CraftData {
    const NAME: &'static str = "craft";
}

impl Listed for CraftData {
    fn is_draft(&self) -> bool {
        self.draft
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn sort_date(&self) -> NaiveDate {
        self.date
    }
}

// ============================================================================
// Projects
// ============================================================================

/// Front matter of a portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "toml_date::deserialize")]
    pub start_date: NaiveDate,

    /// `None` for ongoing projects.
    #[serde(
        default,
        deserialize_with = "toml_date::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,

    /// Informational only: project listings are never filtered.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Collection for ProjectData {
    const NAME: &'static str = "projects";
}

impl Listed for ProjectData {
    fn is_draft(&self) -> bool {
        self.draft
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn sort_date(&self) -> NaiveDate {
        self.start_date
    }
}

// ============================================================================
// Authors
// ============================================================================

/// Author profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorData {
    pub name: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
}

impl Collection for AuthorData {
    const NAME: &'static str = "authors";
}

pub type PostEntry = Entry<PostData>;
pub type CraftEntry = Entry<CraftData>;
pub type ProjectEntry = Entry<ProjectData>;
pub type AuthorEntry = Entry<AuthorData>;

// ============================================================================
// Front matter dates
// ============================================================================

/// Front matter dates are TOML local dates (`date = 2024-03-01`), which
/// serde sees as `toml::value::Datetime` rather than a string.
mod toml_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de::Error};
    use toml::value::Datetime;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let datetime = Datetime::deserialize(deserializer)?;
        let date = datetime
            .date
            .ok_or_else(|| D::Error::custom(format!("`{datetime}` has no date part")))?;
        NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
            .ok_or_else(|| D::Error::custom(format!("`{datetime}` is not a valid date")))
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        deserialize(deserializer).map(Some)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// A heading found while rendering an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 for `#`, up to 6 for `######`.
    pub depth: u8,
    pub slug: String,
    pub text: String,
}

/// Output of rendering one entry, as far as this crate needs it.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub headings: Vec<Heading>,
}
