//! Weather lookup helpers built on `LocalWeatherApi`.

use tracing::instrument;

use super::api::LocalWeatherApi;
use super::types::WeatherSummary;
use crate::error::ClientError;

/// Resolves `name` to a location and fetches its current conditions.
///
/// Issues two requests: one geocoding lookup, then one forecast.
///
/// # Errors
///
/// - [`ClientError::Validation`] if `name` is blank.
/// - [`ClientError::NotFound`] if the geocoder has no match.
/// - [`ClientError::Network`] if either request fails.
#[instrument(skip_all)]
pub async fn weather_for(
    api: &(impl LocalWeatherApi + Sync),
    name: &str,
) -> Result<WeatherSummary, ClientError> {
    let location = api.search_location(name).await?;
    api.current_weather(&location).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::weather::{Location, WeatherCondition};

    /// Mock API that knows a single place.
    struct MockWeatherApi {
        known: &'static str,
        forecast_calls: AtomicU32,
    }

    impl MockWeatherApi {
        const fn new(known: &'static str) -> Self {
            Self {
                known,
                forecast_calls: AtomicU32::new(0),
            }
        }
    }

    impl LocalWeatherApi for MockWeatherApi {
        async fn search_location(&self, name: &str) -> Result<Location, ClientError> {
            if name.trim().is_empty() {
                return Err(ClientError::Validation(String::from(
                    "location name must not be empty",
                )));
            }
            if name == self.known {
                Ok(Location::new(name, 59.94, 30.31))
            } else {
                Err(ClientError::NotFound(format!(
                    "Местоположение не найдено: {name}"
                )))
            }
        }

        async fn current_weather(
            &self,
            location: &Location,
        ) -> Result<WeatherSummary, ClientError> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            Ok(WeatherSummary {
                location: location.clone(),
                observed_at: Some(String::from("2024-07-01T15:00")),
                temperature: Some(22.4),
                apparent_temperature: Some(21.9),
                relative_humidity: Some(60.0),
                wind_speed: Some(8.0),
                weather_code: Some(2),
                condition: WeatherCondition::from_wmo_code(Some(2)),
                is_day: Some(true),
            })
        }
    }

    #[tokio::test]
    async fn test_weather_for_uses_resolved_location() {
        // Arrange
        let mock = MockWeatherApi::new("Санкт-Петербург");

        // Act
        let summary = weather_for(&mock, "Санкт-Петербург").await.unwrap();

        // Assert
        assert_eq!(summary.location.name, "Санкт-Петербург");
        assert_eq!(summary.location.latitude, 59.94);
        assert_eq!(summary.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(mock.forecast_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_weather_for_unknown_place_skips_forecast() {
        // Arrange
        let mock = MockWeatherApi::new("Санкт-Петербург");

        // Act
        let err = weather_for(&mock, "Atlantis").await.unwrap_err();

        // Assert
        assert_eq!(
            err.not_found_message(),
            Some("Местоположение не найдено: Atlantis")
        );
        assert_eq!(mock.forecast_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_for_blank_name_is_validation_error() {
        // Arrange
        let mock = MockWeatherApi::new("Санкт-Петербург");

        // Act
        let result = weather_for(&mock, "  ").await;

        // Assert
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert_eq!(mock.forecast_calls.load(Ordering::SeqCst), 0);
    }
}
