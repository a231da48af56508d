//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{MediaType, MovieDetail, MovieSummary};
use crate::error::ClientError;

/// OMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Failure policy differs per operation and is part of the contract:
/// `search_movies`, `movie_details` and `try_search_by_type` raise,
/// `search_by_type` never fails.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Searches titles by name.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `query` is blank or `page` is out of range.
    /// - [`ClientError::Network`] on transport failure or malformed JSON.
    /// - [`ClientError::NotFound`] if the upstream reports no results.
    async fn search_movies(&self, query: &str, page: u32)
    -> Result<Vec<MovieSummary>, ClientError>;

    /// Fetches the full record for one IMDb id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `id` is blank.
    /// - [`ClientError::Network`] on transport failure or malformed JSON.
    /// - [`ClientError::NotFound`] if the upstream reports no match.
    async fn movie_details(&self, id: &str) -> Result<MovieDetail, ClientError>;

    /// Searches titles of one type, raising on failure.
    ///
    /// # Errors
    ///
    /// Same as [`LocalMovieApi::search_movies`].
    async fn try_search_by_type(
        &self,
        query: &str,
        media_type: MediaType,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ClientError>;

    /// Searches titles of one type.
    ///
    /// Never fails: no results, invalid input and transport failures all
    /// resolve to an empty list.
    async fn search_by_type(
        &self,
        query: &str,
        media_type: MediaType,
        page: u32,
    ) -> Vec<MovieSummary>;
}
