//! Display helpers for movie fields.
//!
//! All helpers are total: a missing value, an empty string, or the OMDb
//! `"N/A"` marker yields a fallback text, anything else passes through.

use crate::sentinel;

/// Shown when a title has no rating.
pub const NO_RATING: &str = "Нет оценки";

/// Shown when a value is unknown.
pub const UNKNOWN: &str = "Неизвестно";

/// Formats an IMDb rating as `"<rating>/10"`.
///
/// ```
/// use mediahub_api::movies::format_rating;
///
/// assert_eq!(format_rating(Some("8.5")), "8.5/10");
/// assert_eq!(format_rating(Some("N/A")), "Нет оценки");
/// assert_eq!(format_rating(None), "Нет оценки");
/// ```
#[must_use]
pub fn format_rating(rating: Option<&str>) -> String {
    match rating {
        Some(r) if !sentinel::is_missing(r) => format!("{r}/10"),
        _ => String::from(NO_RATING),
    }
}

/// Formats a runtime (`"142 min"`).
#[must_use]
pub fn format_runtime(runtime: Option<&str>) -> String {
    or_unknown(runtime)
}

/// Formats box office takings (`"$28,767,189"`).
#[must_use]
pub fn format_box_office(box_office: Option<&str>) -> String {
    or_unknown(box_office)
}

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) if !sentinel::is_missing(v) => String::from(v),
        _ => String::from(UNKNOWN),
    }
}
