//! JSON page views served by the CLI.
//!
//! Each view bundles the query results one page template needs. Lookups of
//! unknown ids produce `None`, which prints as `null`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::to_value;

use crate::{
    cli::Commands,
    config::{Link, SiteConfig, Tech},
    content::{AuthorEntry, ContentProvider, CraftEntry, PostEntry, ProjectEntry},
    query::{
        ContentQuery, Page, QueryError,
        adjacent::{Adjacent, PostNeighbors},
        authors::ResolvedAuthor,
        group_by_year, paginate,
        reading::ReadingTime,
        toc::{TocHeading, TocSection},
    },
};

type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Serialize)]
pub struct YearGroup {
    pub year: i32,
    pub posts: Vec<PostEntry>,
}

#[derive(Debug, Serialize)]
pub struct TagView {
    pub tag: String,
    pub posts: Vec<PostEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub post: PostEntry,
    pub neighbors: PostNeighbors,
    pub authors: Vec<ResolvedAuthor>,
    pub reading_time: ReadingTime,
    pub subposts: Vec<PostEntry>,
    pub toc: Vec<TocSection>,
}

#[derive(Debug, Serialize)]
pub struct CraftView {
    pub craft: CraftEntry,
    pub neighbors: Adjacent<CraftEntry>,
    pub reading_time: ReadingTime,
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub project: ProjectEntry,
    pub neighbors: Adjacent<ProjectEntry>,
    pub toc: Vec<TocHeading>,
}

#[derive(Debug, Serialize)]
pub struct AuthorView {
    pub author: ResolvedAuthor,
    pub profile: AuthorEntry,
    pub posts: Vec<PostEntry>,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub featured_posts: Vec<PostEntry>,
    pub featured_crafts: Vec<CraftEntry>,
    pub recent_projects: Vec<ProjectEntry>,
}

#[derive(Debug, Serialize)]
pub struct SiteView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub href: &'a str,
    pub author: &'a str,
    pub locale: &'a str,
    pub nav: &'a [Link],
    pub social: &'a [Link],
    pub icons: &'a BTreeMap<String, String>,
    pub tech: &'a [Tech],
}

/// Run `command` against `query` and serialize its view.
pub async fn render<P: ContentProvider>(
    command: &Commands,
    config: &SiteConfig,
    query: &ContentQuery<P>,
) -> anyhow::Result<serde_json::Value> {
    let site = &config.site;
    let value = match command {
        Commands::Posts { page } => to_value(posts_page(query, site.posts_per_page, *page).await?),
        Commands::Crafts => to_value(&*query.get_all_crafts().await?),
        Commands::Projects => to_value(&*query.get_all_projects().await?),
        Commands::Archive => to_value(archive(query).await?),
        Commands::Tags { tag: None } => to_value(query.get_sorted_tags().await?),
        Commands::Tags { tag: Some(tag) } => to_value(tag_view(query, tag).await?),
        Commands::Post { id } => to_value(post_view(query, id).await?),
        Commands::Craft { id } => to_value(craft_view(query, id).await?),
        Commands::Project { id } => to_value(project_view(query, id).await?),
        Commands::Author { id } => to_value(author_view(query, id).await?),
        Commands::Home => to_value(home(query, config).await?),
        Commands::Site => to_value(site_view(config)),
    }?;
    Ok(value)
}

pub async fn posts_page<P: ContentProvider>(
    query: &ContentQuery<P>,
    per_page: usize,
    page: usize,
) -> Result<Page<PostEntry>> {
    let posts = query.get_all_posts().await?;
    Ok(paginate(&posts, per_page, page))
}

/// Published posts by year, newest year first.
pub async fn archive<P: ContentProvider>(query: &ContentQuery<P>) -> Result<Vec<YearGroup>> {
    let posts = query.get_all_posts().await?;
    Ok(group_by_year(&posts)
        .into_iter()
        .rev()
        .map(|(year, posts)| YearGroup { year, posts })
        .collect())
}

pub async fn tag_view<P: ContentProvider>(query: &ContentQuery<P>, tag: &str) -> Result<TagView> {
    let (posts, projects) = tokio::try_join!(
        query.get_posts_by_tag(tag),
        query.get_projects_by_tag(tag),
    )?;
    Ok(TagView {
        tag: tag.to_owned(),
        posts,
        projects,
    })
}

pub async fn post_view<P: ContentProvider>(
    query: &ContentQuery<P>,
    id: &str,
) -> Result<Option<PostView>> {
    let Some(post) = query.get_post_by_id(id).await? else {
        return Ok(None);
    };

    let (neighbors, authors, reading_time, toc) = tokio::try_join!(
        query.get_adjacent_posts(id),
        query.parse_authors(&post.data.authors),
        query.get_combined_reading_time(id),
        query.get_toc_sections(id),
    )?;
    let subposts = if post.is_subpost() {
        Vec::new()
    } else {
        query.get_subposts_for_parent(id).await?
    };

    Ok(Some(PostView {
        post,
        neighbors,
        authors,
        reading_time,
        subposts,
        toc,
    }))
}

pub async fn craft_view<P: ContentProvider>(
    query: &ContentQuery<P>,
    id: &str,
) -> Result<Option<CraftView>> {
    let Some(craft) = query.get_craft_by_id(id).await? else {
        return Ok(None);
    };
    let (neighbors, reading_time) = tokio::try_join!(
        query.get_adjacent_crafts(id),
        query.get_craft_reading_time(id),
    )?;
    Ok(Some(CraftView {
        craft,
        neighbors,
        reading_time,
    }))
}

pub async fn project_view<P: ContentProvider>(
    query: &ContentQuery<P>,
    id: &str,
) -> Result<Option<ProjectView>> {
    let Some(project) = query.get_project_by_id(id).await? else {
        return Ok(None);
    };
    let (neighbors, toc) = tokio::try_join!(
        query.get_adjacent_projects(id),
        query.get_project_toc(id),
    )?;
    Ok(Some(ProjectView {
        project,
        neighbors,
        toc,
    }))
}

/// Only registered authors have a page.
pub async fn author_view<P: ContentProvider>(
    query: &ContentQuery<P>,
    id: &str,
) -> Result<Option<AuthorView>> {
    let authors = query.get_all_authors().await?;
    let Some(profile) = authors.iter().find(|author| author.id == id).cloned() else {
        return Ok(None);
    };

    let ids = [id.to_owned()];
    let (resolved, posts) = tokio::try_join!(
        query.parse_authors(&ids),
        query.get_posts_by_author(id),
    )?;
    let Some(author) = resolved.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(AuthorView {
        author,
        profile,
        posts,
    }))
}

pub async fn home<P: ContentProvider>(
    query: &ContentQuery<P>,
    config: &SiteConfig,
) -> Result<HomeView> {
    let site = &config.site;
    let (featured_posts, featured_crafts, recent_projects) = tokio::try_join!(
        query.get_recent_posts(site.featured_post_count),
        query.get_recent_crafts(site.featured_craft_count),
        query.get_recent_projects(site.featured_post_count),
    )?;
    Ok(HomeView {
        featured_posts,
        featured_crafts,
        recent_projects,
    })
}

pub fn site_view(config: &SiteConfig) -> SiteView<'_> {
    let site = &config.site;
    SiteView {
        title: &site.title,
        description: &site.description,
        href: &site.href,
        author: &site.author,
        locale: &site.locale,
        nav: &config.nav,
        social: &config.social,
        icons: &config.icons,
        tech: &config.tech,
    }
}
