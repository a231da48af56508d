//! OMDb movie API client module.
//!
//! Searches titles, fetches full title records, and formats
//! rating, runtime, and box office values for display.

mod api;
mod client;
mod format;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{MovieClient, MovieClientBuilder};
pub use format::{NO_RATING, UNKNOWN, format_box_office, format_rating, format_runtime};
#[allow(clippy::module_name_repetitions)]
pub use types::{MediaType, MovieDetail, MovieSummary, PLACEHOLDER_POSTER, Rating};
