//! Turns client results into output lines.

use std::io::Write;

use anyhow::{Context, Result};
use mediahub_api::books::BookSummary;
use mediahub_api::movies::{
    MovieDetail, MovieSummary, UNKNOWN, format_box_office, format_rating, format_runtime,
};
use mediahub_api::weather::{UNKNOWN_READING, WeatherSummary, format_temperature};
use serde::Serialize;

/// Placeholder for empty table cells.
const DASH: &str = "-";

/// Rendered result of one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// Pretty JSON document, written to stdout as is.
    Json(String),
    /// Human-readable lines, written through the log layer.
    Lines(Vec<String>),
}

impl Output {
    /// Serializes `value` as a pretty JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_string_pretty(value)
            .map(Self::Json)
            .context("failed to serialize output as JSON")
    }

    /// Writes the output to `out` (JSON) or the log layer (lines).
    ///
    /// # Errors
    ///
    /// Returns an error if writing the JSON document fails.
    pub fn write_to(self, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Json(document) => {
                writeln!(out, "{document}").context("failed to write JSON to stdout")?;
                out.flush().context("failed to flush stdout")
            }
            Self::Lines(lines) => {
                for line in &lines {
                    tracing::info!("{line}");
                }
                Ok(())
            }
        }
    }
}

/// Tab-separated table of search hits.
pub fn movie_lines(movies: &[MovieSummary]) -> Vec<String> {
    if movies.is_empty() {
        return vec![String::from("No titles found")];
    }
    let mut lines = vec![String::from("ID\t\tYear\tType\tTitle")];
    lines.extend(movies.iter().map(|m| {
        format!(
            "{}\t{}\t{}\t{}",
            m.id,
            m.year.as_deref().unwrap_or(DASH),
            m.media_type.as_deref().unwrap_or(DASH),
            m.title,
        )
    }));
    lines
}

/// One `Label: value` line per field of a title record.
pub fn detail_lines(detail: &MovieDetail) -> Vec<String> {
    let text = |value: Option<&str>| String::from(value.unwrap_or(UNKNOWN));

    let mut lines = vec![
        format!("ID: {}", detail.id),
        format!("Title: {}", detail.title),
        format!("Year: {}", text(detail.year.as_deref())),
        format!("Rated: {}", text(detail.rated.as_deref())),
        format!("Released: {}", text(detail.released.as_deref())),
        format!("Runtime: {}", format_runtime(detail.runtime.as_deref())),
        format!("Genre: {}", text(detail.genre.as_deref())),
        format!("Director: {}", text(detail.director.as_deref())),
        format!("Writer: {}", text(detail.writer.as_deref())),
        format!("Actors: {}", text(detail.actors.as_deref())),
        format!("Language: {}", text(detail.language.as_deref())),
        format!("Country: {}", text(detail.country.as_deref())),
        format!("Awards: {}", text(detail.awards.as_deref())),
        format!("IMDb: {}", format_rating(detail.imdb_rating.as_deref())),
        format!("Votes: {}", text(detail.imdb_votes.as_deref())),
        format!("Metascore: {}", text(detail.metascore.as_deref())),
        format!("Box office: {}", format_box_office(detail.box_office.as_deref())),
        format!("Poster: {}", detail.poster),
    ];
    lines.extend(
        detail
            .ratings
            .iter()
            .map(|r| format!("  {}: {}", r.source, r.value)),
    );
    lines.push(format!("Plot: {}", text(detail.plot.as_deref())));
    lines
}

/// Tab-separated table of book hits.
pub fn book_lines(books: &[BookSummary]) -> Vec<String> {
    if books.is_empty() {
        return vec![String::from("No books found")];
    }
    let mut lines = vec![String::from("Year\tTitle\tAuthors\tLink")];
    lines.extend(books.iter().map(|b| {
        let year = b.year.map_or_else(|| String::from(DASH), |y| y.to_string());
        format!("{year}\t{}\t{}\t{}", b.title, b.author_display(), b.link)
    }));
    lines
}

/// Human-readable current conditions.
pub fn weather_lines(summary: &WeatherSummary) -> Vec<String> {
    let place = [
        Some(summary.location.name.as_str()),
        summary.location.region.as_deref(),
        summary.location.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");
    let number = |value: Option<f64>, unit: &str| {
        value.map_or_else(|| String::from(UNKNOWN_READING), |v| format!("{v:.0} {unit}"))
    };

    vec![
        format!("Location: {place}"),
        format!(
            "Observed: {}",
            summary.observed_at.as_deref().unwrap_or(UNKNOWN_READING)
        ),
        format!("Condition: {}", summary.condition.description()),
        format!("Temperature: {}", format_temperature(summary.temperature)),
        format!(
            "Feels like: {}",
            format_temperature(summary.apparent_temperature)
        ),
        format!("Humidity: {}", number(summary.relative_humidity, "%")),
        format!("Wind: {}", number(summary.wind_speed, "km/h")),
    ]
}
