//! Open-Meteo weather API client module.
//!
//! Resolves place names through the geocoding API and reads current
//! conditions from the forecast API. Neither endpoint needs an API key.
//! [`weather_for`] chains the two for a place name.

mod api;
mod client;
mod types;
mod util;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalWeatherApi, WeatherApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_LANGUAGE, WeatherClient, WeatherClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{Location, UNKNOWN_READING, WeatherCondition, WeatherSummary, format_temperature};
pub use util::weather_for;
