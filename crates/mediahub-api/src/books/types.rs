//! Open Library search types and the book DTO.

use serde::{Deserialize, Serialize};

/// Public site root used for permalinks.
const OPEN_LIBRARY_SITE: &str = "https://openlibrary.org";

/// Cover image endpoint (medium size).
const COVERS_BASE: &str = "https://covers.openlibrary.org/b/id";

/// Shown when a book has no known author.
pub const NO_AUTHOR: &str = "Автор неизвестен";

/// What to search for.
///
/// Each variant maps to one Open Library search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    /// Free-text search across all fields (`q`).
    Text(String),
    /// Title-scoped search (`title`).
    Title(String),
    /// Author-scoped search (`author`).
    Author(String),
}

impl BookQuery {
    /// Free-text query.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Title-scoped query.
    #[must_use]
    pub fn title(value: impl Into<String>) -> Self {
        Self::Title(value.into())
    }

    /// Author-scoped query.
    #[must_use]
    pub fn author(value: impl Into<String>) -> Self {
        Self::Author(value.into())
    }

    /// Name of the query parameter.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        match self {
            Self::Text(_) => "q",
            Self::Title(_) => "title",
            Self::Author(_) => "author",
        }
    }

    /// Trimmed search value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Text(v) | Self::Title(v) | Self::Author(v) => v.trim(),
        }
    }

    /// Returns `true` if there is nothing to search for.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value().is_empty()
    }
}

/// One book search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    /// Open Library work key (`/works/OL27448W`).
    pub key: String,
    /// Title.
    pub title: String,
    /// Author names, in upstream order; empty when unknown.
    pub authors: Vec<String>,
    /// First publication year.
    pub year: Option<i32>,
    /// Medium-size cover URL; `None` when the work has no cover.
    pub cover: Option<String>,
    /// Permalink on openlibrary.org.
    pub link: String,
}

impl BookSummary {
    /// Authors joined with `", "`, or [`NO_AUTHOR`].
    #[must_use]
    pub fn author_display(&self) -> String {
        if self.authors.is_empty() {
            String::from(NO_AUTHOR)
        } else {
            self.authors.join(", ")
        }
    }
}

/// Builds the medium-size cover URL for a cover id.
#[must_use]
pub fn cover_url(cover_id: i64) -> String {
    format!("{COVERS_BASE}/{cover_id}-M.jpg")
}

// --- Open Library wire types ---

/// Response from `search.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OpenLibrarySearchResponse {
    pub docs: Vec<OpenLibraryDoc>,
}

/// One entry of `docs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OpenLibraryDoc {
    pub key: String,
    pub title: String,
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub cover_i: Option<i64>,
}

impl From<OpenLibraryDoc> for BookSummary {
    fn from(doc: OpenLibraryDoc) -> Self {
        let authors = doc
            .author_name
            .into_iter()
            .map(|name| String::from(name.trim()))
            .filter(|name| !name.is_empty())
            .collect();
        let cover = doc.cover_i.filter(|id| *id > 0).map(cover_url);
        let link = format!("{OPEN_LIBRARY_SITE}{}", doc.key);

        Self {
            key: doc.key,
            title: doc.title,
            authors,
            year: doc.first_publish_year,
            cover,
            link,
        }
    }
}
