//! The content query facade.
//!
//! [`ContentQuery`] owns a provider and a [`MemoCache`]. Base collections are
//! loaded through the cache once; every derived view (adjacency, tags,
//! subposts, TOC, ...) is computed on demand from those cached lists.
//!
//! # Cached views
//!
//! | Key                  | Contents                                         |
//! |----------------------|--------------------------------------------------|
//! | `authors`            | all authors                                      |
//! | `posts`              | published posts (no drafts, no subposts), newest first |
//! | `crafts`             | published crafts, newest first                   |
//! | `posts_and_subposts` | non-draft posts including subposts, newest first |
//! | `projects`           | all projects, latest start first                 |

use std::sync::Arc;

use super::{
    adjacent::{Adjacent, PostNeighbors, adjacent},
    authors::{ResolvedAuthor, resolve_authors},
    cache::MemoCache,
    error::QueryError,
    filter::{by_date, by_subpost_order, filter_sorted, has_author, has_tag, not_draft, published},
    reading::ReadingTime,
    tags::{TagCount, TagCounts, count_tags, sort_tags},
    toc::{self, TocHeading, TocSection},
};
use crate::content::{
    AuthorData, AuthorEntry, ContentProvider, CraftData, CraftEntry, Entry, PostData, PostEntry,
    ProjectData, ProjectEntry, id, markdown,
};

pub type Result<T> = std::result::Result<T, QueryError>;

/// Avatar used for authors without a profile picture.
pub const DEFAULT_AVATAR: &str = "/static/logo.png";

mod keys {
    pub const AUTHORS: &str = "authors";
    pub const POSTS: &str = "posts";
    pub const CRAFTS: &str = "crafts";
    pub const POSTS_AND_SUBPOSTS: &str = "posts_and_subposts";
    pub const PROJECTS: &str = "projects";
}

/// Query layer over one content provider.
///
/// Construct one per build and pass it to whatever renders pages; the cache
/// lives exactly as long as this value.
pub struct ContentQuery<P> {
    provider: P,
    cache: MemoCache,
    default_avatar: String,
}

impl<P: ContentProvider> ContentQuery<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: MemoCache::new(),
            default_avatar: DEFAULT_AVATAR.to_owned(),
        }
    }

    /// Replace the fallback avatar used by [`Self::parse_authors`].
    pub fn with_default_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.default_avatar = avatar.into();
        self
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[cfg(test)]
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    // ========================================================================
    // Cached collections
    // ========================================================================

    pub async fn get_all_authors(&self) -> Result<Arc<Vec<AuthorEntry>>> {
        self.cache
            .get_or_compute(keys::AUTHORS, || async move {
                Ok(self.provider.get_collection::<AuthorData>().await?)
            })
            .await
    }

    /// Published posts, newest first.
    pub async fn get_all_posts(&self) -> Result<Arc<Vec<PostEntry>>> {
        self.cache
            .get_or_compute(keys::POSTS, || async move {
                let posts = self.provider.get_collection::<PostData>().await?;
                Ok(filter_sorted(posts, published, by_date))
            })
            .await
    }

    /// Published crafts, newest first.
    pub async fn get_all_crafts(&self) -> Result<Arc<Vec<CraftEntry>>> {
        self.cache
            .get_or_compute(keys::CRAFTS, || async move {
                let crafts = self.provider.get_collection::<CraftData>().await?;
                Ok(filter_sorted(crafts, published, by_date))
            })
            .await
    }

    /// Non-draft posts and subposts, newest first.
    pub async fn get_all_posts_and_subposts(&self) -> Result<Arc<Vec<PostEntry>>> {
        self.cache
            .get_or_compute(keys::POSTS_AND_SUBPOSTS, || async move {
                let posts = self.provider.get_collection::<PostData>().await?;
                Ok(filter_sorted(posts, not_draft, by_date))
            })
            .await
    }

    /// All projects, latest start date first. The `draft` flag does not hide a project.
    pub async fn get_all_projects(&self) -> Result<Arc<Vec<ProjectEntry>>> {
        self.cache
            .get_or_compute(keys::PROJECTS, || async move {
                let projects = self.provider.get_collection::<ProjectData>().await?;
                Ok(filter_sorted(projects, |_| true, by_date))
            })
            .await
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Non-draft post or subpost by id.
    pub async fn get_post_by_id(&self, id: &str) -> Result<Option<PostEntry>> {
        Ok(find(&self.get_all_posts_and_subposts().await?, id))
    }

    pub async fn get_craft_by_id(&self, id: &str) -> Result<Option<CraftEntry>> {
        Ok(find(&self.get_all_crafts().await?, id))
    }

    pub async fn get_project_by_id(&self, id: &str) -> Result<Option<ProjectEntry>> {
        Ok(find(&self.get_all_projects().await?, id))
    }

    /// Parent of a subpost; `None` for top-level ids.
    pub async fn get_parent_post(&self, subpost_id: &str) -> Result<Option<PostEntry>> {
        if !id::is_subpost(subpost_id) {
            return Ok(None);
        }
        self.get_post_by_id(id::parent_id(subpost_id)).await
    }

    pub async fn get_recent_posts(&self, count: usize) -> Result<Vec<PostEntry>> {
        Ok(take(&self.get_all_posts().await?, count))
    }

    pub async fn get_recent_crafts(&self, count: usize) -> Result<Vec<CraftEntry>> {
        Ok(take(&self.get_all_crafts().await?, count))
    }

    pub async fn get_recent_projects(&self, count: usize) -> Result<Vec<ProjectEntry>> {
        Ok(take(&self.get_all_projects().await?, count))
    }

    // ========================================================================
    // Adjacency
    // ========================================================================

    /// Previous/next navigation for a post.
    ///
    /// A subpost navigates among its siblings (in reading order) and also
    /// gets its published parent. A top-level post navigates among the
    /// published posts.
    pub async fn get_adjacent_posts(&self, current_id: &str) -> Result<PostNeighbors> {
        if id::is_subpost(current_id) {
            let parent_id = id::parent_id(current_id);
            let parent = find(&self.get_all_posts().await?, parent_id);
            let siblings = self.get_subposts_for_parent(parent_id).await?;
            return Ok(PostNeighbors::new(adjacent(&siblings, current_id), parent));
        }

        let posts = self.get_all_posts().await?;
        Ok(PostNeighbors::new(adjacent(&posts, current_id), None))
    }

    pub async fn get_adjacent_crafts(&self, current_id: &str) -> Result<Adjacent<CraftEntry>> {
        Ok(adjacent(&self.get_all_crafts().await?, current_id))
    }

    pub async fn get_adjacent_projects(&self, current_id: &str) -> Result<Adjacent<ProjectEntry>> {
        Ok(adjacent(&self.get_all_projects().await?, current_id))
    }

    // ========================================================================
    // Tags and filters
    // ========================================================================

    /// Tag usage across published posts and all projects.
    pub async fn get_all_tags(&self) -> Result<TagCounts> {
        let (posts, projects) = tokio::try_join!(self.get_all_posts(), self.get_all_projects())?;

        let mut counts = TagCounts::new();
        count_tags(posts.iter(), &mut counts);
        count_tags(projects.iter(), &mut counts);
        Ok(counts)
    }

    /// Tags by descending count, ties in ascending name order.
    pub async fn get_sorted_tags(&self) -> Result<Vec<TagCount>> {
        Ok(sort_tags(&self.get_all_tags().await?))
    }

    pub async fn get_posts_by_tag(&self, tag: &str) -> Result<Vec<PostEntry>> {
        Ok(select(&self.get_all_posts().await?, |post| has_tag(post, tag)))
    }

    pub async fn get_projects_by_tag(&self, tag: &str) -> Result<Vec<ProjectEntry>> {
        Ok(select(&self.get_all_projects().await?, |project| {
            has_tag(project, tag)
        }))
    }

    pub async fn get_posts_by_author(&self, author_id: &str) -> Result<Vec<PostEntry>> {
        Ok(select(&self.get_all_posts().await?, |post| {
            has_author(post, author_id)
        }))
    }

    // ========================================================================
    // Subposts
    // ========================================================================

    /// Non-draft subposts of `parent_id`, in reading order.
    pub async fn get_subposts_for_parent(&self, parent_id: &str) -> Result<Vec<PostEntry>> {
        let posts = self.get_all_posts_and_subposts().await?;
        let mut subposts = select(&posts, |post| {
            post.is_subpost() && post.parent_id() == parent_id
        });
        subposts.sort_by(by_subpost_order);
        Ok(subposts)
    }

    pub async fn has_subposts(&self, post_id: &str) -> Result<bool> {
        Ok(self.get_subpost_count(post_id).await? > 0)
    }

    pub async fn get_subpost_count(&self, parent_id: &str) -> Result<usize> {
        Ok(self.get_subposts_for_parent(parent_id).await?.len())
    }

    // ========================================================================
    // Authors
    // ========================================================================

    /// Resolve author ids to display records.
    ///
    /// An empty list returns immediately without loading the authors.
    pub async fn parse_authors(&self, author_ids: &[String]) -> Result<Vec<ResolvedAuthor>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        let authors = self.get_all_authors().await?;
        Ok(resolve_authors(author_ids, &authors, &self.default_avatar))
    }

    // ========================================================================
    // Reading time
    // ========================================================================

    pub async fn get_post_reading_time(&self, id: &str) -> Result<ReadingTime> {
        Ok(reading_time(self.get_post_by_id(id).await?.as_ref()))
    }

    pub async fn get_craft_reading_time(&self, id: &str) -> Result<ReadingTime> {
        Ok(reading_time(self.get_craft_by_id(id).await?.as_ref()))
    }

    /// Reading time of a post together with all of its subposts.
    ///
    /// Subposts report only their own words.
    pub async fn get_combined_reading_time(&self, post_id: &str) -> Result<ReadingTime> {
        let Some(post) = self.get_post_by_id(post_id).await? else {
            return Ok(ReadingTime::from_words(0));
        };

        let mut words = markdown::word_count(&post.body);
        if !post.is_subpost() {
            words += self
                .get_subposts_for_parent(post_id)
                .await?
                .iter()
                .map(|subpost| markdown::word_count(&subpost.body))
                .sum::<usize>();
        }
        Ok(ReadingTime::from_words(words))
    }

    // ========================================================================
    // Table of contents
    // ========================================================================

    /// Sectioned TOC for a post and its series.
    ///
    /// Resolves `post_id` to its parent, then emits the parent's overview
    /// followed by one section per subpost in reading order. Sections without
    /// headings are left out; unknown ids give an empty TOC.
    pub async fn get_toc_sections(&self, post_id: &str) -> Result<Vec<TocSection>> {
        let Some(post) = self.get_post_by_id(post_id).await? else {
            return Ok(Vec::new());
        };

        let parent_id = post.parent_id().to_owned();
        let parent = if post.is_subpost() {
            match self.get_post_by_id(&parent_id).await? {
                Some(parent) => parent,
                None => return Ok(Vec::new()),
            }
        } else {
            post
        };

        let mut sections = Vec::new();
        let rendered = self.provider.render(&parent).await?;
        sections.extend(toc::parent_section(rendered.headings));

        for subpost in self.get_subposts_for_parent(&parent_id).await? {
            let rendered = self.provider.render(&subpost).await?;
            sections.extend(toc::subpost_section(&subpost, rendered.headings));
        }

        Ok(sections)
    }

    /// Flat heading list of a project.
    pub async fn get_project_toc(&self, project_id: &str) -> Result<Vec<TocHeading>> {
        let Some(project) = self.get_project_by_id(project_id).await? else {
            return Ok(Vec::new());
        };
        let rendered = self.provider.render(&project).await?;
        Ok(toc::flat(rendered.headings))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn find<D: Clone>(entries: &[Entry<D>], id: &str) -> Option<Entry<D>> {
    entries.iter().find(|entry| entry.id == id).cloned()
}

fn take<D: Clone>(entries: &[Entry<D>], count: usize) -> Vec<Entry<D>> {
    entries.iter().take(count).cloned().collect()
}

fn select<D: Clone>(entries: &[Entry<D>], keep: impl Fn(&Entry<D>) -> bool) -> Vec<Entry<D>> {
    entries.iter().filter(|entry| keep(entry)).cloned().collect()
}

fn reading_time<D>(entry: Option<&Entry<D>>) -> ReadingTime {
    ReadingTime::from_words(entry.map_or(0, |entry| markdown::word_count(&entry.body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::memory::{
        MemoryProvider, author, craft, draft, ordered, post, project, with_body,
    };

    /// A blog with one series (`series` + two subposts) and a draft.
    fn blog() -> MemoryProvider {
        let mut author_post = post("hello", "2024-01-10", &["rust", "intro"]);
        author_post.data.authors = vec!["jane".into(), "ghost".into()];

        MemoryProvider::new()
            .with(vec![
                author_post,
                with_body(post("series", "2024-03-01", &["rust"]), 300),
                with_body(ordered(post("series/part-2", "2024-03-02", &[]), 0), 150),
                with_body(ordered(post("series/part-1", "2024-03-02", &[]), -1), 100),
                draft(post("series/part-3", "2024-03-03", &[])),
                draft(post("unfinished", "2024-05-01", &["rust"])),
                post("latest", "2024-04-01", &["web"]),
            ])
            .with(vec![
                craft("sketch", "2024-02-01"),
                craft("shader", "2024-06-01"),
            ])
            .with(vec![
                project("old", "2020-01-01", &["cli", "rust"]),
                project("new", "2023-01-01", &["web"]),
            ])
            .with(vec![author("jane", "Jane Doe", "/jane.png")])
            .with_headings::<PostData>("series", &[(2, "Why"), (2, "Plan")])
            .with_headings::<PostData>("series/part-1", &[(2, "Setup"), (3, "Install")])
            .with_headings::<PostData>("series/part-2", &[(2, "Build")])
            .with_headings::<ProjectData>("old", &[(2, "Goals"), (3, "Stack")])
    }

    fn ids(entries: &[PostEntry]) -> Vec<&str> {
        entries.iter().map(|p| p.id.as_str()).collect()
    }

    fn id_of<D>(entry: &Option<Entry<D>>) -> Option<&str> {
        entry.as_ref().map(|e| e.id.as_str())
    }

    #[tokio::test]
    async fn test_cached_views() {
        let query = ContentQuery::new(blog());

        assert_eq!(
            ids(&query.get_all_posts().await.unwrap()),
            vec!["latest", "series", "hello"]
        );
        assert_eq!(
            ids(&query.get_all_posts_and_subposts().await.unwrap()),
            vec!["latest", "series/part-2", "series/part-1", "series", "hello"]
        );

        let crafts = query.get_all_crafts().await.unwrap();
        assert_eq!(crafts[0].id, "shader");

        let projects = query.get_all_projects().await.unwrap();
        assert_eq!(projects[0].id, "new");
    }

    #[tokio::test]
    async fn test_draft_projects_stay_listed() {
        let mut hidden = project("wip", "2024-01-01", &["rust"]);
        hidden.data.draft = true;
        let query = ContentQuery::new(MemoryProvider::new().with(vec![hidden]));

        let projects = query.get_all_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(query.get_all_tags().await.unwrap()["rust"], 1);
    }

    #[tokio::test]
    async fn test_cached_getters_load_once() {
        let query = ContentQuery::new(blog());

        let first = query.get_all_posts().await.unwrap();
        let second = query.get_all_posts().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(query.provider().loads::<PostData>(), 1);

        // The subpost-inclusive view is its own key
        query.get_all_posts_and_subposts().await.unwrap();
        query.get_all_posts_and_subposts().await.unwrap();
        assert_eq!(query.provider().loads::<PostData>(), 2);
        assert!(query.cache().contains("posts_and_subposts"));
    }

    #[tokio::test]
    async fn test_concurrent_getters_load_once() {
        let query = ContentQuery::new(blog());

        let (a, b) = tokio::join!(query.get_all_projects(), query.get_all_projects());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(query.provider().loads::<ProjectData>(), 1);
    }

    #[tokio::test]
    async fn test_lookups() {
        let query = ContentQuery::new(blog());

        assert!(query.get_post_by_id("series/part-1").await.unwrap().is_some());
        assert!(query.get_post_by_id("unfinished").await.unwrap().is_none());
        assert!(query.get_post_by_id("missing").await.unwrap().is_none());
        assert!(query.get_craft_by_id("sketch").await.unwrap().is_some());
        assert!(query.get_project_by_id("nope").await.unwrap().is_none());

        let parent = query.get_parent_post("series/part-2").await.unwrap();
        assert_eq!(id_of(&parent), Some("series"));
        assert!(query.get_parent_post("series").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent() {
        let query = ContentQuery::new(blog());

        assert_eq!(
            ids(&query.get_recent_posts(2).await.unwrap()),
            vec!["latest", "series"]
        );
        assert_eq!(query.get_recent_crafts(10).await.unwrap().len(), 2);
        assert!(query.get_recent_projects(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adjacent_top_level_posts() {
        let query = ContentQuery::new(blog());
        let posts = query.get_all_posts().await.unwrap();

        for (index, current) in posts.iter().enumerate() {
            let neighbors = query.get_adjacent_posts(&current.id).await.unwrap();
            let newer = index.checked_sub(1).map(|i| posts[i].id.as_str());
            let older = posts.get(index + 1).map(|p| p.id.as_str());

            assert_eq!(id_of(&neighbors.newer), newer);
            assert_eq!(id_of(&neighbors.older), older);
            assert!(neighbors.parent.is_none());
        }
    }

    #[tokio::test]
    async fn test_adjacent_subposts() {
        let query = ContentQuery::new(blog());

        let first = query.get_adjacent_posts("series/part-1").await.unwrap();
        assert_eq!(id_of(&first.parent), Some("series"));
        assert_eq!(id_of(&first.newer), None);
        assert_eq!(id_of(&first.older), Some("series/part-2"));

        let second = query.get_adjacent_posts("series/part-2").await.unwrap();
        assert_eq!(id_of(&second.newer), Some("series/part-1"));
        assert_eq!(id_of(&second.older), None);
    }

    #[tokio::test]
    async fn test_adjacent_unknown_ids() {
        let query = ContentQuery::new(blog());

        let neighbors = query.get_adjacent_posts("missing").await.unwrap();
        assert!(neighbors.newer.is_none() && neighbors.older.is_none());

        let orphan = query.get_adjacent_posts("nobody/child").await.unwrap();
        assert!(orphan.parent.is_none() && orphan.newer.is_none() && orphan.older.is_none());
    }

    #[tokio::test]
    async fn test_adjacent_crafts_and_projects() {
        let query = ContentQuery::new(blog());

        let crafts = query.get_adjacent_crafts("shader").await.unwrap();
        assert_eq!(id_of(&crafts.older), Some("sketch"));
        assert!(crafts.newer.is_none());

        let projects = query.get_adjacent_projects("old").await.unwrap();
        assert_eq!(id_of(&projects.newer), Some("new"));
    }

    #[tokio::test]
    async fn test_tags() {
        let query = ContentQuery::new(blog());

        let counts = query.get_all_tags().await.unwrap();
        // Drafts and subposts do not contribute
        assert_eq!(counts["rust"], 3);
        assert_eq!(counts["web"], 2);

        let sorted = query.get_sorted_tags().await.unwrap();
        let names: Vec<_> = sorted.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(names, vec!["rust", "web", "cli", "intro"]);

        let total: usize = sorted.iter().map(|t| t.count).sum();
        assert_eq!(total, 7);
    }

    #[tokio::test]
    async fn test_filter_by_tag_and_author() {
        let query = ContentQuery::new(blog());

        assert_eq!(
            ids(&query.get_posts_by_tag("rust").await.unwrap()),
            vec!["series", "hello"]
        );
        let projects = query.get_projects_by_tag("web").await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(
            ids(&query.get_posts_by_author("jane").await.unwrap()),
            vec!["hello"]
        );
    }

    #[tokio::test]
    async fn test_subposts() {
        let query = ContentQuery::new(blog());

        let subposts = query.get_subposts_for_parent("series").await.unwrap();
        assert_eq!(ids(&subposts), vec!["series/part-1", "series/part-2"]);
        assert!(query.has_subposts("series").await.unwrap());
        assert_eq!(query.get_subpost_count("hello").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_parse_authors() {
        let query = ContentQuery::new(blog()).with_default_avatar("/fallback.png");

        let none = query.parse_authors(&[]).await.unwrap();
        assert!(none.is_empty());
        assert_eq!(query.provider().loads::<AuthorData>(), 0);

        let post = query.get_post_by_id("hello").await.unwrap().unwrap();
        let authors = query.parse_authors(&post.data.authors).await.unwrap();
        assert_eq!(authors[0].name, "Jane Doe");
        assert!(authors[0].is_registered);
        assert_eq!(authors[1].name, "ghost");
        assert_eq!(authors[1].avatar, "/fallback.png");
        assert!(!authors[1].is_registered);
    }

    #[tokio::test]
    async fn test_reading_time() {
        let query = ContentQuery::new(blog());

        let parent_only = query.get_post_reading_time("series").await.unwrap();
        let combined = query.get_combined_reading_time("series").await.unwrap();
        assert_eq!(parent_only.words, 300);
        assert_eq!(combined, ReadingTime::from_words(300 + 100 + 150));
        assert!(combined > parent_only);

        let subpost = query.get_combined_reading_time("series/part-2").await.unwrap();
        assert_eq!(subpost.words, 150);

        let missing = query.get_combined_reading_time("missing").await.unwrap();
        assert_eq!(missing, ReadingTime::from_words(0));
        assert_eq!(
            query.get_craft_reading_time("sketch").await.unwrap(),
            ReadingTime::from_words(0)
        );
    }

    #[tokio::test]
    async fn test_toc_sections() {
        let query = ContentQuery::new(blog());

        let sections = query.get_toc_sections("series").await.unwrap();
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].kind, toc::SectionKind::Parent);
        assert_eq!(sections[0].title, toc::OVERVIEW_TITLE);
        assert_eq!(sections[0].headings.len(), 2);
        assert!(sections[0].headings.iter().all(|h| !h.is_subpost_title));

        assert_eq!(sections[1].kind, toc::SectionKind::Subpost);
        assert_eq!(sections[1].subpost_id.as_deref(), Some("series/part-1"));
        assert!(sections[1].headings[0].is_subpost_title);
        assert!(!sections[1].headings[1].is_subpost_title);

        assert_eq!(sections[2].subpost_id.as_deref(), Some("series/part-2"));
        assert!(sections[2].headings[0].is_subpost_title);

        // A subpost resolves to the same series TOC
        let from_child = query.get_toc_sections("series/part-2").await.unwrap();
        assert_eq!(from_child, sections);
    }

    #[tokio::test]
    async fn test_toc_omits_empty_sections() {
        let query = ContentQuery::new(blog());

        // "hello" has no headings and no subposts
        assert!(query.get_toc_sections("hello").await.unwrap().is_empty());
        assert!(query.get_toc_sections("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_project_toc() {
        let query = ContentQuery::new(blog());

        let headings = query.get_project_toc("old").await.unwrap();
        let slugs: Vec<_> = headings.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(slugs, vec!["goals", "stack"]);
        assert!(query.get_project_toc("new").await.unwrap().is_empty());
        assert!(query.get_project_toc("missing").await.unwrap().is_empty());
    }
}
