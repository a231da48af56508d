//! Open Library book search client module.
//!
//! Searches works by free text, title, or author and maps them into
//! book summaries with cover and permalink URLs.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{BookApi, LocalBookApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{BookClient, BookClientBuilder, DEFAULT_LIMIT};
#[allow(clippy::module_name_repetitions)]
pub use types::{BookQuery, BookSummary, NO_AUTHOR, cover_url};
