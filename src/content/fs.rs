//! Filesystem content provider.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── blog/
//! │   ├── hello.md            id: "hello"
//! │   └── series/
//! │       ├── index.md        id: "series"
//! │       └── part-1.md       id: "series/part-1" (subpost)
//! ├── craft/*.md
//! ├── projects/*.md
//! └── authors/*.toml | *.md
//! ```
//!
//! Every `.md` file opens with a `+++` TOML front matter block. Author
//! profiles may be plain `.toml` files instead.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{
    error::ContentError,
    frontmatter, markdown,
    provider::ContentProvider,
    types::{Collection, Entry, Rendered},
};
use crate::log;

/// Extensions recognised as content files.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "toml"];

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Index file name collapsed into its directory's id.
const INDEX_STEM: &str = "index";

/// Loads collections from `<root>/<collection>/`.
#[derive(Debug, Clone)]
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentProvider for FsProvider {
    async fn get_collection<D: Collection>(&self) -> Result<Vec<Entry<D>>, ContentError> {
        let dir = self.root.join(D::NAME);
        let entries = tokio::task::spawn_blocking(move || load_collection::<D>(&dir)).await??;
        log!("load"; "{} entries from `{}`", entries.len(), D::NAME);
        Ok(entries)
    }

    async fn render<D: Collection>(&self, entry: &Entry<D>) -> Result<Rendered, ContentError> {
        Ok(markdown::render(&entry.body))
    }
}

/// Read and parse every content file under `dir`.
///
/// A missing directory is an empty collection.
fn load_collection<D: Collection>(dir: &Path) -> Result<Vec<Entry<D>>, ContentError> {
    if !dir.is_dir() {
        log!("warn"; "collection directory `{}` not found", dir.display());
        return Ok(Vec::new());
    }

    let files = collect_content_files(dir)?;
    files
        .par_iter()
        .map(|path| parse_entry::<D>(dir, path))
        .collect()
}

/// Collect content files recursively, sorted by path.
fn collect_content_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) || !has_content_extension(entry.path()) {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Parse one file into an entry of collection `D`.
fn parse_entry<D: Collection>(dir: &Path, path: &Path) -> Result<Entry<D>, ContentError> {
    let content = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_owned(), err))?;

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let (front, body) = if is_toml {
        (content.as_str(), "")
    } else {
        frontmatter::split(&content)
            .ok_or_else(|| ContentError::MissingFrontMatter(path.to_owned()))?
    };

    let data = toml::from_str::<D>(front).map_err(|source| ContentError::FrontMatter {
        path: path.to_owned(),
        source,
    })?;

    Ok(Entry::new(entry_id(dir, path), data, body))
}

/// Compute an entry id from its path relative to the collection directory.
///
/// | Path (relative)      | id              |
/// |----------------------|-----------------|
/// | `hello.md`           | `hello`         |
/// | `series/index.md`    | `series`        |
/// | `series/part-1.md`   | `series/part-1` |
fn entry_id(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");

    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.len() > 1 && parts.last().is_some_and(|last| last == INDEX_STEM) {
        parts.pop();
    }
    parts.join("/")
}
