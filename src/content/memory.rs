//! In-memory provider for tests.
//!
//! Counts collection loads so memoization can be asserted, and yields once
//! per load so concurrent callers actually interleave.

use std::any::Any;

use chrono::NaiveDate;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::{
    error::ContentError,
    provider::ContentProvider,
    types::{
        AuthorData, Collection, CraftData, Entry, Heading, PostData, ProjectData, Rendered,
    },
};
use crate::utils::slug::slugify_fragment;

#[derive(Default)]
pub struct MemoryProvider {
    collections: FxHashMap<&'static str, Box<dyn Any + Send + Sync>>,
    headings: FxHashMap<(&'static str, String), Vec<Heading>>,
    loads: Mutex<FxHashMap<&'static str, usize>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the records of collection `D`.
    pub fn with<D: Collection>(mut self, entries: Vec<Entry<D>>) -> Self {
        self.collections.insert(D::NAME, Box::new(entries));
        self
    }

    /// Register the heading outline returned when rendering `id` of collection `D`.
    pub fn with_headings<D: Collection>(mut self, id: &str, headings: &[(u8, &str)]) -> Self {
        let headings = headings
            .iter()
            .map(|(depth, text)| Heading {
                depth: *depth,
                slug: slugify_fragment(text),
                text: (*text).to_owned(),
            })
            .collect();
        self.headings.insert((D::NAME, id.to_owned()), headings);
        self
    }

    /// How many times collection `D` was loaded.
    pub fn loads<D: Collection>(&self) -> usize {
        self.loads.lock().get(D::NAME).copied().unwrap_or(0)
    }
}

impl ContentProvider for MemoryProvider {
    async fn get_collection<D: Collection>(&self) -> Result<Vec<Entry<D>>, ContentError> {
        *self.loads.lock().entry(D::NAME).or_default() += 1;
        tokio::task::yield_now().await;

        Ok(self
            .collections
            .get(D::NAME)
            .and_then(|entries| entries.downcast_ref::<Vec<Entry<D>>>())
            .cloned()
            .unwrap_or_default())
    }

    async fn render<D: Collection>(&self, entry: &Entry<D>) -> Result<Rendered, ContentError> {
        let headings = self
            .headings
            .get(&(D::NAME, entry.id.clone()))
            .cloned()
            .unwrap_or_default();
        Ok(Rendered { headings })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A published post with an empty body.
pub fn post(id: &str, day: &str, tags: &[&str]) -> Entry<PostData> {
    Entry::new(
        id,
        PostData {
            title: format!("Post {id}"),
            description: String::new(),
            date: date(day),
            draft: false,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            authors: Vec::new(),
            order: None,
            image: None,
        },
        "",
    )
}

pub fn draft(mut entry: Entry<PostData>) -> Entry<PostData> {
    entry.data.draft = true;
    entry
}

pub fn ordered(mut entry: Entry<PostData>, order: i64) -> Entry<PostData> {
    entry.data.order = Some(order);
    entry
}

pub fn with_body<D>(mut entry: Entry<D>, words: usize) -> Entry<D> {
    entry.body = vec!["word"; words].join(" ");
    entry
}

pub fn craft(id: &str, day: &str) -> Entry<CraftData> {
    Entry::new(
        id,
        CraftData {
            title: format!("Craft {id}"),
            description: String::new(),
            date: date(day),
            draft: false,
            tags: Vec::new(),
            image: None,
            link: None,
        },
        "",
    )
}

pub fn project(id: &str, start: &str, tags: &[&str]) -> Entry<ProjectData> {
    Entry::new(
        id,
        ProjectData {
            name: format!("Project {id}"),
            description: String::new(),
            start_date: date(start),
            end_date: None,
            draft: false,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            link: None,
            image: None,
        },
        "",
    )
}

pub fn author(id: &str, name: &str, avatar: &str) -> Entry<AuthorData> {
    Entry::new(
        id,
        AuthorData {
            name: name.to_owned(),
            avatar: avatar.to_owned(),
            pronouns: None,
            bio: None,
            website: None,
            github: None,
            twitter: None,
            mail: None,
        },
        "",
    )
}
