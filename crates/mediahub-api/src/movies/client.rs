//! `MovieClient` - OMDb API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalMovieApi;
use super::types::{
    DETAILS_NOT_FOUND, MOVIES_NOT_FOUND, MediaType, MovieDetail, MovieSummary, OmdbDetailResponse,
    OmdbSearchResponse,
};
use crate::error::ClientError;
use crate::http::{build_http_client, empty_on_failure, get_json, resolve_base_url};

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Upstream name used in logs and error messages.
const UPSTREAM: &str = "OMDb";

/// Query parameter carrying the credential; never logged.
const API_KEY_PARAM: &str = "apikey";

/// Highest page OMDb serves.
const MAX_PAGE: u32 = 100;

/// OMDb API client.
#[allow(clippy::module_name_repetitions)]
pub struct MovieClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// OMDb API key.
    api_key: String,
}

impl std::fmt::Debug for MovieClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builder for `MovieClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl MovieClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the OMDb API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or blank.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<MovieClient, ClientError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ClientError::Build(String::from("api_key is required")))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| ClientError::Build(String::from("user_agent is required")))?;

        let base_url = resolve_base_url(self.base_url, DEFAULT_BASE_URL)?;
        let http_client = build_http_client(&user_agent)?;

        Ok(MovieClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

/// Trims `query` and rejects blank input or pages outside `1..=100`.
fn validate_search(query: &str, page: u32) -> Result<&str, ClientError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ClientError::Validation(String::from(
            "search query must not be empty",
        )));
    }
    if !(1..=MAX_PAGE).contains(&page) {
        return Err(ClientError::Validation(format!(
            "page must be between 1 and {MAX_PAGE}, got {page}"
        )));
    }
    Ok(query)
}

impl MovieClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MovieClientBuilder {
        MovieClientBuilder::new()
    }

    /// Sends a GET request to the OMDb endpoint with the API key appended.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        mut query: Vec<(&str, String)>,
    ) -> Result<T, ClientError> {
        query.push((API_KEY_PARAM, self.api_key.clone()));
        get_json(
            &self.http_client,
            self.base_url.clone(),
            &query,
            UPSTREAM,
            &[API_KEY_PARAM],
        )
        .await
    }
}

impl LocalMovieApi for MovieClient {
    #[instrument(skip_all)]
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ClientError> {
        let query = validate_search(query, page)?;
        let params = vec![("s", String::from(query)), ("page", page.to_string())];

        let response: OmdbSearchResponse = self.get(params).await?;
        let movies = response.into_summaries(MOVIES_NOT_FOUND)?;
        tracing::debug!(count = movies.len(), "OMDb search completed");
        Ok(movies)
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, id: &str) -> Result<MovieDetail, ClientError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ClientError::Validation(String::from(
                "movie id must not be empty",
            )));
        }
        let params = vec![("i", String::from(id)), ("plot", String::from("full"))];

        let response: OmdbDetailResponse = self.get(params).await?;
        response.into_detail(DETAILS_NOT_FOUND)
    }

    #[instrument(skip_all)]
    async fn try_search_by_type(
        &self,
        query: &str,
        media_type: MediaType,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ClientError> {
        let query = validate_search(query, page)?;
        let params = vec![
            ("s", String::from(query)),
            ("type", String::from(media_type.as_str())),
            ("page", page.to_string()),
        ];

        let response: OmdbSearchResponse = self.get(params).await?;
        response.into_summaries(MOVIES_NOT_FOUND)
    }

    #[instrument(skip_all)]
    async fn search_by_type(
        &self,
        query: &str,
        media_type: MediaType,
        page: u32,
    ) -> Vec<MovieSummary> {
        settle_typed_search(self.try_search_by_type(query, media_type, page).await)
    }
}

/// Resolves a typed search to a list. "Not found" is logged at debug,
/// every other failure at warn.
fn settle_typed_search(result: Result<Vec<MovieSummary>, ClientError>) -> Vec<MovieSummary> {
    match result {
        Err(ClientError::NotFound(message)) => {
            tracing::debug!(%message, "OMDb typed search returned no results");
            Vec::new()
        }
        other => empty_on_failure("search_by_type", other),
    }
}
