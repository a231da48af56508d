//! `BookClient` - Open Library search client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalBookApi;
use super::types::{BookQuery, BookSummary, OpenLibrarySearchResponse};
use crate::error::ClientError;
use crate::http::{build_http_client, empty_on_failure, get_json, join, resolve_base_url};

/// Default base URL for the Open Library API.
const DEFAULT_BASE_URL: &str = "https://openlibrary.org/";

/// Search endpoint path, relative to the base URL.
const SEARCH_PATH: &str = "search.json";

/// Upstream name used in logs and error messages.
const UPSTREAM: &str = "Open Library";

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 20;

/// Open Library API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct BookClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `BookClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct BookClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl BookClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
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
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<BookClient, ClientError> {
        let user_agent = self
            .user_agent
            .ok_or_else(|| ClientError::Build(String::from("user_agent is required")))?;

        let base_url = resolve_base_url(self.base_url, DEFAULT_BASE_URL)?;
        let http_client = build_http_client(&user_agent)?;

        Ok(BookClient {
            http_client,
            base_url,
        })
    }
}

impl BookClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> BookClientBuilder {
        BookClientBuilder::new()
    }
}

impl LocalBookApi for BookClient {
    #[instrument(skip_all)]
    async fn search(&self, query: &BookQuery, limit: usize) -> Vec<BookSummary> {
        if query.is_blank() {
            tracing::debug!("blank book query, skipping request");
            return Vec::new();
        }
        empty_on_failure("book_search", self.try_search(query, limit).await)
    }

    #[instrument(skip_all)]
    async fn try_search(
        &self,
        query: &BookQuery,
        limit: usize,
    ) -> Result<Vec<BookSummary>, ClientError> {
        if query.is_blank() {
            return Err(ClientError::Validation(String::from(
                "book query must not be empty",
            )));
        }
        if limit == 0 {
            return Err(ClientError::Validation(String::from(
                "limit must be at least 1",
            )));
        }

        let url = join(&self.base_url, SEARCH_PATH)?;
        let params = [
            (query.param(), String::from(query.value())),
            ("limit", limit.to_string()),
        ];

        let response: OpenLibrarySearchResponse =
            get_json(&self.http_client, url, &params, UPSTREAM, &[]).await?;

        let books: Vec<BookSummary> = response
            .docs
            .into_iter()
            .take(limit)
            .map(BookSummary::from)
            .collect();
        tracing::debug!(count = books.len(), "Open Library search completed");
        Ok(books)
    }
}
