//! OMDb response types and the movie DTOs they map into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::sentinel::{self, deserialize_optional};

/// Poster path used when the upstream has no poster.
pub const PLACEHOLDER_POSTER: &str = "/placeholder-movie.jpg";

/// Fallback message when a search reports no results without an `Error` text.
pub(crate) const MOVIES_NOT_FOUND: &str = "Фильмы не найдены";

/// Fallback message when a detail lookup fails without an `Error` text.
pub(crate) const DETAILS_NOT_FOUND: &str = "Информация о фильме не найдена";

// --- Request parameters ---

/// OMDb `type` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature films.
    #[default]
    Movie,
    /// TV series.
    Series,
    /// Single episodes.
    Episode,
}

impl MediaType {
    /// Value of the `type` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            "episode" => Ok(Self::Episode),
            other => Err(ClientError::Validation(format!(
                "unknown media type: {other} (expected movie, series or episode)"
            ))),
        }
    }
}

// --- DTOs ---

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSummary {
    /// IMDb id (e.g. `tt0111161`).
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year or year range (`"2008–2013"` for series).
    pub year: Option<String>,
    /// Upstream type (`movie`, `series`, `episode`, `game`).
    pub media_type: Option<String>,
    /// Absolute poster URL or [`PLACEHOLDER_POSTER`].
    pub poster: String,
}

/// A single rating source entry (`Internet Movie Database`, `Metacritic`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating source name.
    #[serde(rename(deserialize = "Source"))]
    pub source: String,
    /// Rating value as displayed by the source (`"9.3/10"`, `"91%"`).
    #[serde(rename(deserialize = "Value"))]
    pub value: String,
}

/// Full record for one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetail {
    /// IMDb id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year or year range.
    pub year: Option<String>,
    /// Age rating (`R`, `PG-13`).
    pub rated: Option<String>,
    /// Release date (`14 Oct 1994`).
    pub released: Option<String>,
    /// Runtime (`142 min`).
    pub runtime: Option<String>,
    /// Comma-separated genres.
    pub genre: Option<String>,
    /// Director(s).
    pub director: Option<String>,
    /// Writer(s).
    pub writer: Option<String>,
    /// Main cast.
    pub actors: Option<String>,
    /// Full plot.
    pub plot: Option<String>,
    /// Languages.
    pub language: Option<String>,
    /// Countries.
    pub country: Option<String>,
    /// Awards summary.
    pub awards: Option<String>,
    /// Absolute poster URL or [`PLACEHOLDER_POSTER`].
    pub poster: String,
    /// Ratings from individual sources; empty when the upstream has none.
    pub ratings: Vec<Rating>,
    /// Metacritic score.
    pub metascore: Option<String>,
    /// IMDb rating (`"9.3"`).
    pub imdb_rating: Option<String>,
    /// IMDb vote count (`"2,900,000"`).
    pub imdb_votes: Option<String>,
    /// Upstream type.
    pub media_type: Option<String>,
    /// Box office takings (`"$28,767,189"`).
    pub box_office: Option<String>,
}

// --- OMDb wire types ---

/// Response from `?s=` search requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OmdbSearchResponse {
    /// `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: String,
    /// Error text when `response` is `"False"`.
    #[serde(rename = "Error", deserialize_with = "deserialize_optional")]
    pub error: Option<String>,
    /// Result page.
    #[serde(rename = "Search")]
    pub search: Vec<OmdbSearchItem>,
}

/// One item of the `Search` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct OmdbSearchItem {
    pub title: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub r#type: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub poster: Option<String>,
}

/// Response from `?i=` detail requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct OmdbDetailResponse {
    pub response: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub error: Option<String>,
    pub title: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub year: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub rated: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub released: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub runtime: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub genre: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub director: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub writer: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub actors: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub plot: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub language: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub country: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub awards: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub poster: Option<String>,
    pub ratings: Option<Vec<Rating>>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating", deserialize_with = "deserialize_optional")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", deserialize_with = "deserialize_optional")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub r#type: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub box_office: Option<String>,
}

/// Checks the `Response` envelope shared by every OMDb payload.
fn check_envelope(
    response: &str,
    error: Option<String>,
    fallback: &str,
) -> Result<(), ClientError> {
    if response == "False" {
        return Err(ClientError::NotFound(
            error.unwrap_or_else(|| String::from(fallback)),
        ));
    }
    Ok(())
}

/// Returns the poster URL, or the placeholder when missing.
fn poster_or_placeholder(poster: Option<String>) -> String {
    poster.unwrap_or_else(|| String::from(PLACEHOLDER_POSTER))
}

impl OmdbSearchResponse {
    /// Converts the payload into summaries, or `NotFound` when the upstream
    /// reported no results.
    pub(crate) fn into_summaries(self, fallback: &str) -> Result<Vec<MovieSummary>, ClientError> {
        check_envelope(&self.response, self.error, fallback)?;
        if self.search.is_empty() {
            return Err(ClientError::NotFound(String::from(fallback)));
        }
        Ok(self.search.into_iter().map(MovieSummary::from).collect())
    }
}

impl OmdbDetailResponse {
    /// Converts the payload into a detail record, or `NotFound` when the
    /// upstream reported no match.
    pub(crate) fn into_detail(mut self, fallback: &str) -> Result<MovieDetail, ClientError> {
        check_envelope(&self.response, self.error.take(), fallback)?;
        Ok(MovieDetail::from(self))
    }
}

impl From<OmdbSearchItem> for MovieSummary {
    fn from(item: OmdbSearchItem) -> Self {
        Self {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            media_type: item.r#type,
            poster: poster_or_placeholder(item.poster),
        }
    }
}

impl From<OmdbDetailResponse> for MovieDetail {
    fn from(raw: OmdbDetailResponse) -> Self {
        let ratings = raw
            .ratings
            .unwrap_or_default()
            .into_iter()
            .filter(|r| !sentinel::is_missing(&r.value))
            .collect();

        Self {
            id: raw.imdb_id,
            title: raw.title,
            year: raw.year,
            rated: raw.rated,
            released: raw.released,
            runtime: raw.runtime,
            genre: raw.genre,
            director: raw.director,
            writer: raw.writer,
            actors: raw.actors,
            plot: raw.plot,
            language: raw.language,
            country: raw.country,
            awards: raw.awards,
            poster: poster_or_placeholder(raw.poster),
            ratings,
            metascore: raw.metascore,
            imdb_rating: raw.imdb_rating,
            imdb_votes: raw.imdb_votes,
            media_type: raw.r#type,
            box_office: raw.box_office,
        }
    }
}
