//! Normalization of upstream "no data" markers.
//!
//! OMDb reports missing values as the literal string `"N/A"`. These helpers
//! fold that marker, empty strings, `null`, and absent fields into `None`
//! at deserialization time.

use serde::{Deserialize, Deserializer};

/// Literal used by OMDb in place of a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns `true` if `value` carries no data.
#[must_use]
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == NOT_AVAILABLE
}

/// Maps a sentinel or empty string to `None`.
#[must_use]
pub fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_missing(v))
}

/// Serde adapter: `Option<String>` with sentinel normalization.
///
/// Use together with `#[serde(default)]` so absent fields become `None`.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize(raw))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "deserialize_optional")]
        value: Option<String>,
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing("N/A"));
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(!is_missing("8.5"));
        assert!(!is_missing("n/a tour"));
    }

    #[test]
    fn test_deserialize_sentinel_is_none() {
        // Arrange & Act
        let record: Record = serde_json::from_str(r#"{"value":"N/A"}"#).unwrap();

        // Assert
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_deserialize_null_and_absent_are_none() {
        // Arrange & Act
        let null: Record = serde_json::from_str(r#"{"value":null}"#).unwrap();
        let absent: Record = serde_json::from_str("{}").unwrap();

        // Assert
        assert_eq!(null.value, None);
        assert_eq!(absent.value, None);
    }

    #[test]
    fn test_deserialize_keeps_real_value() {
        // Arrange & Act
        let record: Record = serde_json::from_str(r#"{"value":"142 min"}"#).unwrap();

        // Assert
        assert_eq!(record.value.as_deref(), Some("142 min"));
    }
}
