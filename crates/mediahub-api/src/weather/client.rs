//! `WeatherClient` - Open-Meteo geocoding and forecast client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalWeatherApi;
use super::types::{ForecastResponse, GeocodingResponse, Location, WeatherSummary};
use crate::error::ClientError;
use crate::http::{build_http_client, get_json, join, resolve_base_url};

/// Default base URL for the Open-Meteo forecast API.
const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/";

/// Default base URL for the Open-Meteo geocoding API.
const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/";

/// Forecast endpoint path.
const FORECAST_PATH: &str = "forecast";

/// Geocoding endpoint path.
const GEOCODING_PATH: &str = "search";

/// Variables requested in the `current` block.
const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m";

/// Upstream name used in logs and error messages.
const UPSTREAM: &str = "Open-Meteo";

/// Default language for geocoding results.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Open-Meteo API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WeatherClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for forecast requests.
    forecast_base_url: Url,
    /// Base URL for geocoding requests.
    geocoding_base_url: Url,
    /// Language for place names.
    language: String,
}

/// Builder for `WeatherClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WeatherClientBuilder {
    forecast_base_url: Option<Url>,
    geocoding_base_url: Option<Url>,
    user_agent: Option<String>,
    language: Option<String>,
}

impl WeatherClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            forecast_base_url: None,
            geocoding_base_url: None,
            user_agent: None,
            language: None,
        }
    }

    /// Overrides the forecast base URL (for wiremock in tests).
    #[must_use]
    pub fn forecast_base_url(mut self, url: Url) -> Self {
        self.forecast_base_url = Some(url);
        self
    }

    /// Overrides the geocoding base URL (for wiremock in tests).
    #[must_use]
    pub fn geocoding_base_url(mut self, url: Url) -> Self {
        self.geocoding_base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the language for geocoding results (default `en`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<WeatherClient, ClientError> {
        let user_agent = self
            .user_agent
            .ok_or_else(|| ClientError::Build(String::from("user_agent is required")))?;

        let forecast_base_url =
            resolve_base_url(self.forecast_base_url, DEFAULT_FORECAST_BASE_URL)?;
        let geocoding_base_url =
            resolve_base_url(self.geocoding_base_url, DEFAULT_GEOCODING_BASE_URL)?;
        let language = self
            .language
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE));
        let http_client = build_http_client(&user_agent)?;

        Ok(WeatherClient {
            http_client,
            forecast_base_url,
            geocoding_base_url,
            language,
        })
    }
}

impl WeatherClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> WeatherClientBuilder {
        WeatherClientBuilder::new()
    }
}

impl LocalWeatherApi for WeatherClient {
    #[instrument(skip_all)]
    async fn search_location(&self, name: &str) -> Result<Location, ClientError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation(String::from(
                "location name must not be empty",
            )));
        }

        let url = join(&self.geocoding_base_url, GEOCODING_PATH)?;
        let params = [
            ("name", String::from(name)),
            ("count", String::from("1")),
            ("language", self.language.clone()),
            ("format", String::from("json")),
        ];

        let response: GeocodingResponse =
            get_json(&self.http_client, url, &params, UPSTREAM, &[]).await?;

        let location = response
            .results
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| ClientError::NotFound(format!("Местоположение не найдено: {name}")))?;
        tracing::debug!(
            name = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "location resolved"
        );
        Ok(location)
    }

    #[instrument(skip_all)]
    async fn current_weather(&self, location: &Location) -> Result<WeatherSummary, ClientError> {
        location.validate()?;

        let url = join(&self.forecast_base_url, FORECAST_PATH)?;
        let params = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", String::from(CURRENT_VARIABLES)),
            ("timezone", String::from("auto")),
        ];

        let response: ForecastResponse =
            get_json(&self.http_client, url, &params, UPSTREAM, &[]).await?;
        response.into_summary(location.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::weather::WeatherCondition;

    fn client_for(mock_server: &wiremock::MockServer) -> WeatherClient {
        let base_url: Url = format!("{}/", mock_server.uri()).parse().unwrap();
        WeatherClient::builder()
            .forecast_base_url(base_url.clone())
            .geocoding_base_url(base_url)
            .user_agent("test/0.0.0")
            .language("ru")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = WeatherClient::builder().build();

        // Assert
        assert!(matches!(result, Err(ClientError::Build(_))));
    }

    #[test]
    fn test_builder_defaults() {
        // Arrange & Act
        let client = WeatherClient::builder()
            .user_agent("test/0.0.0")
            .language("  ")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.forecast_base_url.as_str(), DEFAULT_FORECAST_BASE_URL);
        assert_eq!(client.geocoding_base_url.as_str(), DEFAULT_GEOCODING_BASE_URL);
        assert_eq!(client.language, DEFAULT_LANGUAGE);
    }

    #[tokio::test]
    async fn test_search_location_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/openmeteo/geocoding_moscow.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/search"))
            .and(wiremock::matchers::query_param("name", "Москва"))
            .and(wiremock::matchers::query_param("count", "1"))
            .and(wiremock::matchers::query_param("language", "ru"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let location = client.search_location("  Москва ").await.unwrap();

        // Assert
        assert_eq!(location.name, "Москва");
        assert_eq!(location.region.as_deref(), Some("Москва"));
        assert_eq!(location.timezone.as_deref(), Some("Europe/Moscow"));
    }

    #[tokio::test]
    async fn test_search_location_no_results_is_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/openmeteo/geocoding_empty.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let err = client.search_location("Atlantis").await.unwrap_err();

        // Assert
        assert_eq!(
            err.not_found_message(),
            Some("Местоположение не найдено: Atlantis")
        );
    }

    #[tokio::test]
    async fn test_search_location_blank_makes_no_request() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.search_location(" \t").await;

        // Assert
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_current_weather_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/openmeteo/forecast_moscow.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/forecast"))
            .and(wiremock::matchers::query_param("latitude", "55.75222"))
            .and(wiremock::matchers::query_param("longitude", "37.61556"))
            .and(wiremock::matchers::query_param("current", CURRENT_VARIABLES))
            .and(wiremock::matchers::query_param("timezone", "auto"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let location = Location::new("Москва", 55.752_22, 37.615_56);

        // Act
        let summary = client.current_weather(&location).await.unwrap();

        // Assert
        assert_eq!(summary.location.name, "Москва");
        assert_eq!(summary.temperature, Some(-5.2));
        assert_eq!(summary.apparent_temperature, Some(-9.8));
        assert_eq!(summary.wind_speed, Some(12.3));
        assert_eq!(summary.condition, WeatherCondition::Snow);
    }

    #[tokio::test]
    async fn test_current_weather_invalid_coordinates_makes_no_request() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client
            .current_weather(&Location::new("nowhere", 120.0, 0.0))
            .await;

        // Assert
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_current_weather_upstream_error_is_network_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(400)
                    .set_body_string(r#"{"error":true,"reason":"Cannot initialize WeatherVariable"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let err = client
            .current_weather(&Location::new("Москва", 55.75, 37.62))
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, ClientError::Network { .. }));
        assert!(err.to_string().contains("Open-Meteo API error"));
    }
}
