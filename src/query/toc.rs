//! Table-of-contents structures.
//!
//! A parent post and its subposts read as one document, so its TOC is split
//! into sections:
//!
//! ```text
//! ┌ Overview            (parent headings)
//! ├ Part 1              (subpost; first heading flagged as its title)
//! └ Part 2
//! ```

use serde::Serialize;

use crate::content::{Heading, PostEntry};

/// Title of the section holding the parent post's own headings.
pub const OVERVIEW_TITLE: &str = "Overview";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocHeading {
    pub slug: String,
    pub text: String,
    pub depth: u8,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_subpost_title: bool,
}

impl From<Heading> for TocHeading {
    fn from(heading: Heading) -> Self {
        Self {
            slug: heading.slug,
            text: heading.text,
            depth: heading.depth,
            is_subpost_title: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Parent,
    Subpost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocSection {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    pub headings: Vec<TocHeading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpost_id: Option<String>,
}

/// Flat heading list, for entries without sections.
pub fn flat(headings: Vec<Heading>) -> Vec<TocHeading> {
    headings.into_iter().map(TocHeading::from).collect()
}

/// Overview section for a parent post. `None` when it has no headings.
pub fn parent_section(headings: Vec<Heading>) -> Option<TocSection> {
    (!headings.is_empty()).then(|| TocSection {
        kind: SectionKind::Parent,
        title: OVERVIEW_TITLE.to_owned(),
        headings: flat(headings),
        subpost_id: None,
    })
}

/// Section for one subpost. `None` when it has no headings.
pub fn subpost_section(subpost: &PostEntry, headings: Vec<Heading>) -> Option<TocSection> {
    if headings.is_empty() {
        return None;
    }

    let headings = headings
        .into_iter()
        .enumerate()
        .map(|(index, heading)| TocHeading {
            is_subpost_title: index == 0,
            ..TocHeading::from(heading)
        })
        .collect();

    Some(TocSection {
        kind: SectionKind::Subpost,
        title: subpost.data.title.clone(),
        headings,
        subpost_id: Some(subpost.id.clone()),
    })
}
