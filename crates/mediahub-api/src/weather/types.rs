//! Open-Meteo response types and the weather DTOs.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Shown when a reading is missing.
pub const UNKNOWN_READING: &str = "Неизвестно";

/// A named point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Display name (`Москва`).
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Country name.
    pub country: Option<String>,
    /// First-level administrative region.
    pub region: Option<String>,
    /// IANA timezone (`Europe/Moscow`).
    pub timezone: Option<String>,
}

impl Location {
    /// Creates a location from raw coordinates.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: None,
            region: None,
            timezone: None,
        }
    }

    /// Checks that the coordinates are in range.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for latitudes outside `-90..=90`,
    /// longitudes outside `-180..=180`, or non-finite values.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ClientError::Validation(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ClientError::Validation(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Weather condition grouped from a WMO weather interpretation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Code 0.
    Clear,
    /// Code 1.
    MainlyClear,
    /// Code 2.
    PartlyCloudy,
    /// Code 3.
    Overcast,
    /// Codes 45, 48.
    Fog,
    /// Codes 51-57.
    Drizzle,
    /// Codes 61-67.
    Rain,
    /// Codes 71-77.
    Snow,
    /// Codes 80-82.
    RainShowers,
    /// Codes 85, 86.
    SnowShowers,
    /// Codes 95-99.
    Thunderstorm,
    /// Missing or unrecognised code.
    Unknown,
}

impl WeatherCondition {
    /// Maps a WMO code to a condition.
    #[must_use]
    pub const fn from_wmo_code(code: Option<u16>) -> Self {
        match code {
            Some(0) => Self::Clear,
            Some(1) => Self::MainlyClear,
            Some(2) => Self::PartlyCloudy,
            Some(3) => Self::Overcast,
            Some(45 | 48) => Self::Fog,
            Some(51 | 53 | 55 | 56 | 57) => Self::Drizzle,
            Some(61 | 63 | 65 | 66 | 67) => Self::Rain,
            Some(71 | 73 | 75 | 77) => Self::Snow,
            Some(80..=82) => Self::RainShowers,
            Some(85 | 86) => Self::SnowShowers,
            Some(95 | 96 | 99) => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clear => "Ясно",
            Self::MainlyClear => "Преимущественно ясно",
            Self::PartlyCloudy => "Переменная облачность",
            Self::Overcast => "Пасмурно",
            Self::Fog => "Туман",
            Self::Drizzle => "Морось",
            Self::Rain => "Дождь",
            Self::Snow => "Снег",
            Self::RainShowers => "Ливень",
            Self::SnowShowers => "Снегопад",
            Self::Thunderstorm => "Гроза",
            Self::Unknown => UNKNOWN_READING,
        }
    }
}

/// Current conditions at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    /// Where the reading applies.
    pub location: Location,
    /// Local observation time (`2024-01-15T12:00`).
    pub observed_at: Option<String>,
    /// Air temperature at 2 m, °C.
    pub temperature: Option<f64>,
    /// Feels-like temperature, °C.
    pub apparent_temperature: Option<f64>,
    /// Relative humidity at 2 m, %.
    pub relative_humidity: Option<f64>,
    /// Wind speed at 10 m, km/h.
    pub wind_speed: Option<f64>,
    /// Raw WMO weather code.
    pub weather_code: Option<u16>,
    /// Condition derived from `weather_code`.
    pub condition: WeatherCondition,
    /// Daylight flag.
    pub is_day: Option<bool>,
}

/// Formats a temperature as `"-5.2 °C"`, or a fallback when missing.
#[must_use]
pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(t) if t.is_finite() => format!("{t:.1} °C"),
        _ => String::from(UNKNOWN_READING),
    }
}

// --- Open-Meteo wire types ---

/// Response from the geocoding `search` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GeocodingResponse {
    pub results: Vec<GeocodingResult>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(raw: GeocodingResult) -> Self {
        Self {
            name: raw.name,
            latitude: raw.latitude,
            longitude: raw.longitude,
            country: raw.country.filter(|c| !c.is_empty()),
            region: raw.admin1.filter(|r| !r.is_empty()),
            timezone: raw.timezone.filter(|t| !t.is_empty()),
        }
    }
}

/// Response from the `forecast` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ForecastResponse {
    pub timezone: Option<String>,
    pub current: Option<CurrentBlock>,
}

/// The `current` block requested through the `current=` parameter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CurrentBlock {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub is_day: Option<u8>,
    pub weather_code: Option<u16>,
    pub wind_speed_10m: Option<f64>,
}

impl ForecastResponse {
    /// Combines the response with the requested location.
    pub(crate) fn into_summary(
        self,
        mut location: Location,
    ) -> Result<WeatherSummary, ClientError> {
        let current = self.current.ok_or_else(|| {
            ClientError::network_message("Open-Meteo response has no current block")
        })?;
        if location.timezone.is_none() {
            location.timezone = self.timezone;
        }

        Ok(WeatherSummary {
            location,
            observed_at: current.time,
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            relative_humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            weather_code: current.weather_code,
            condition: WeatherCondition::from_wmo_code(current.weather_code),
            is_day: current.is_day.map(|flag| flag != 0),
        })
    }
}
