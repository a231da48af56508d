//! API client library for mediahub.
//!
//! Provides clients for the OMDb movie API, the Open Library search API,
//! and the Open-Meteo geocoding and forecast APIs.

/// Open Library book search client.
pub mod books;
/// Error type shared by all clients.
pub mod error;
mod http;
/// OMDb movie API client.
pub mod movies;
/// `"N/A"` sentinel normalization.
pub mod sentinel;
/// Open-Meteo weather client.
pub mod weather;

pub use error::ClientError;
