//! Author id resolution.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::content::AuthorEntry;

/// An author id resolved against the authors collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAuthor {
    pub id: String,
    pub name: String,
    pub avatar: String,
    /// `false` when the id has no profile; name and avatar are then fallbacks.
    pub is_registered: bool,
}

/// Resolve each id in order. Unknown ids fall back to the id as name and
/// `default_avatar`; registered profiles with an empty name or avatar fall
/// back the same way.
pub fn resolve_authors(
    ids: &[String],
    authors: &[AuthorEntry],
    default_avatar: &str,
) -> Vec<ResolvedAuthor> {
    let by_id: FxHashMap<&str, &AuthorEntry> =
        authors.iter().map(|author| (author.id.as_str(), author)).collect();

    ids.iter()
        .map(|id| {
            let profile = by_id.get(id.as_str()).map(|author| &author.data);
            let name = profile
                .map(|p| p.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(id.as_str());
            let avatar = profile
                .map(|p| p.avatar.as_str())
                .filter(|avatar| !avatar.is_empty())
                .unwrap_or(default_avatar);

            ResolvedAuthor {
                id: id.clone(),
                name: name.to_owned(),
                avatar: avatar.to_owned(),
                is_registered: profile.is_some(),
            }
        })
        .collect()
}
