//! `BookApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{BookQuery, BookSummary};
use crate::error::ClientError;

/// Open Library API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(BookApi: Send)]
pub trait LocalBookApi {
    /// Searches books, returning at most `limit` results.
    ///
    /// Never fails: a blank query returns an empty list without a request,
    /// and transport or parse failures resolve to an empty list.
    async fn search(&self, query: &BookQuery, limit: usize) -> Vec<BookSummary>;

    /// Searches books, raising on failure.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if the query is blank or `limit` is zero.
    /// - [`ClientError::Network`] on transport failure or malformed JSON.
    async fn try_search(
        &self,
        query: &BookQuery,
        limit: usize,
    ) -> Result<Vec<BookSummary>, ClientError>;
}
