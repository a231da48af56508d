//! Error type shared by all upstream clients.

use thiserror::Error;

/// Boxed error kept as the source of a [`ClientError::Network`].
type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a client operation.
///
/// Which operations surface these and which fold them into an empty
/// result is documented per method.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ClientError {
    /// Transport-level failure: connection error, non-2xx status,
    /// unreadable body, or malformed JSON.
    #[error("network error: {message}")]
    Network {
        /// What went wrong, including the upstream name.
        message: String,
        /// Underlying transport or decode error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// The upstream explicitly reported that nothing matched.
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller-supplied input was rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// The client could not be constructed.
    #[error("client build error: {0}")]
    Build(String),
}

impl ClientError {
    /// Wraps an underlying error as a network failure.
    pub(crate) fn network<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Network failure without an underlying error value.
    pub(crate) fn network_message(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the upstream message when this is a [`ClientError::NotFound`].
    #[must_use]
    pub fn not_found_message(&self) -> Option<&str> {
        match self {
            Self::NotFound(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_network_error_keeps_source() {
        // Arrange
        let io = std::io::Error::other("connection reset");

        // Act
        let err = ClientError::network("OMDb request failed", io);

        // Assert
        assert_eq!(err.to_string(), "network error: OMDb request failed");
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }

    #[test]
    fn test_network_message_has_no_source() {
        // Arrange & Act
        let err = ClientError::network_message("OMDb API error (HTTP 500)");

        // Assert
        assert!(err.source().is_none());
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_not_found_message() {
        // Arrange
        let not_found = ClientError::NotFound(String::from("Movie not found!"));
        let validation = ClientError::Validation(String::from("query is empty"));

        // Act & Assert
        assert_eq!(not_found.not_found_message(), Some("Movie not found!"));
        assert_eq!(validation.not_found_message(), None);
    }
}
