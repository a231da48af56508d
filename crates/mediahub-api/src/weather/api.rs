//! `WeatherApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{Location, WeatherSummary};
use crate::error::ClientError;

/// Open-Meteo weather API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(WeatherApi: Send)]
pub trait LocalWeatherApi {
    /// Resolves a place name to its best-matching location.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `name` is blank.
    /// - [`ClientError::NotFound`] if the geocoder has no match.
    /// - [`ClientError::Network`] on transport failure or malformed JSON.
    async fn search_location(&self, name: &str) -> Result<Location, ClientError>;

    /// Fetches current conditions at `location`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if the coordinates are out of range.
    /// - [`ClientError::Network`] on transport failure, malformed JSON,
    ///   or a response without a `current` block.
    async fn current_weather(&self, location: &Location) -> Result<WeatherSummary, ClientError>;
}
