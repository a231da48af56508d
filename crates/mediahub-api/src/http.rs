//! Shared HTTP plumbing for the upstream clients.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::ClientError;

/// Error payload shapes returned alongside non-2xx statuses.
///
/// Open-Meteo sends `{"error": true, "reason": "..."}`,
/// OMDb sends `{"Response": "False", "Error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "Error")]
    reason: Option<String>,
}

/// Builds the underlying `reqwest::Client`.
pub(crate) fn build_http_client(user_agent: &str) -> Result<Client, ClientError> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .build()
        .map_err(|e| ClientError::Build(format!("failed to build HTTP client: {e}")))
}

/// Parses `raw` as a base URL, falling back to `default` when `raw` is `None`.
pub(crate) fn resolve_base_url(raw: Option<Url>, default: &str) -> Result<Url, ClientError> {
    match raw {
        Some(url) => Ok(url),
        None => Url::parse(default)
            .map_err(|e| ClientError::Build(format!("invalid default base URL {default}: {e}"))),
    }
}

/// Joins `path` onto `base`.
pub(crate) fn join(base: &Url, path: &str) -> Result<Url, ClientError> {
    base.join(path)
        .map_err(|e| ClientError::network(format!("failed to join URL path: {path}"), e))
}

/// Sends one GET request and decodes the JSON body.
///
/// `query` values are URL-encoded by `reqwest`. Pairs whose key is listed
/// in `redacted` are omitted from the debug log, and transport errors are
/// stripped of their URL so credentials never reach error messages.
#[instrument(skip_all, fields(upstream = upstream))]
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    query: &[(&str, String)],
    upstream: &'static str,
    redacted: &[&str],
) -> Result<T, ClientError> {
    let request = client
        .get(url)
        .query(query)
        .build()
        .map_err(|e| ClientError::network(format!("failed to build {upstream} request"), e))?;

    let logged: Vec<(&str, &str)> = query
        .iter()
        .filter(|(key, _)| !redacted.contains(key))
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    tracing::debug!(path = request.url().path(), query = ?logged, "{upstream} API request");

    let response = client
        .execute(request)
        .await
        .map_err(|e| ClientError::network(format!("{upstream} request failed"), e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<failed to read body>"));
        if let Ok(ErrorBody {
            reason: Some(reason),
        }) = serde_json::from_str::<ErrorBody>(&body)
        {
            return Err(ClientError::network_message(format!(
                "{upstream} API error (HTTP {status}): {reason}"
            )));
        }
        return Err(ClientError::network_message(format!(
            "{upstream} API error (HTTP {status}): {body}"
        )));
    }

    let body = response.text().await.map_err(|e| {
        ClientError::network(
            format!("failed to read {upstream} response body"),
            e.without_url(),
        )
    })?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::network(format!("failed to decode {upstream} JSON response"), e))
}

/// Resolves a fallible list operation to an empty list, logging the failure.
///
/// Used by operations whose contract is "never fail".
pub(crate) fn empty_on_failure<T>(
    operation: &'static str,
    result: Result<Vec<T>, ClientError>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(operation, error = %err, "request failed, returning empty result");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::Value;
    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    fn test_client() -> Client {
        build_http_client("test/0.0.0").unwrap()
    }

    #[test]
    fn test_resolve_base_url_default() {
        // Arrange & Act
        let url = resolve_base_url(None, "https://www.omdbapi.com/").unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://www.omdbapi.com/");
    }

    #[test]
    fn test_resolve_base_url_invalid_default() {
        // Arrange & Act
        let result = resolve_base_url(None, "not a url");

        // Assert
        assert!(matches!(result, Err(ClientError::Build(_))));
    }

    #[test]
    fn test_empty_on_failure_passes_items_through() {
        // Arrange & Act
        let items = empty_on_failure("test", Ok(vec![1, 2, 3]));

        // Assert
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_on_failure_logs_warning() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(tracing::Level::WARN))
            .only()
            .run_with_handle();

        // Act
        let items: Vec<u32> = with_default(subscriber, || {
            empty_on_failure(
                "search_by_type",
                Err(ClientError::network_message("OMDb API error (HTTP 500)")),
            )
        });

        // Assert
        assert!(items.is_empty());
        handle.assert_finished();
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/data"))
            .and(wiremock::matchers::query_param("q", "a b"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(r#"{"ok":1}"#))
            .expect(1)
            .mount(&mock_server)
            .await;
        let url: Url = format!("{}/data", mock_server.uri()).parse().unwrap();

        // Act
        let value: Value = get_json(
            &test_client(),
            url,
            &[("q", String::from("a b"))],
            "Test",
            &[],
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(value["ok"], 1);
    }

    #[tokio::test]
    async fn test_get_json_reports_error_reason() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{"error":true,"reason":"Latitude must be in range of -90 to 90°."}"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(400).set_body_string(body))
            .mount(&mock_server)
            .await;
        let url: Url = mock_server.uri().parse().unwrap();

        // Act
        let result: Result<Value, _> = get_json(&test_client(), url, &[], "Test", &[]).await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::Network { .. }));
        let message = err.to_string();
        assert!(message.contains("HTTP 400"));
        assert!(message.contains("Latitude must be in range"));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body_is_network_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;
        let url: Url = mock_server.uri().parse().unwrap();

        // Act
        let result: Result<Value, _> = get_json(&test_client(), url, &[], "Test", &[]).await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::Network { .. }));
        assert!(err.to_string().contains("failed to decode Test JSON response"));
    }
}
