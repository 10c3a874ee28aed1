//! Weather buckets and the observations they are derived from

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::OutfindError;

/// WMO weather codes at or above this value report drizzle, rain, snow,
/// showers or thunderstorms.
pub const DEFAULT_PRECIPITATION_CODE_MIN: u16 = 51;

/// Discrete weather bucket used for filtering and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    Cold,
    Mild,
    Warm,
    Rainy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 4] = [
        WeatherKind::Cold,
        WeatherKind::Mild,
        WeatherKind::Warm,
        WeatherKind::Rainy,
    ];

    /// Lowercase wire name, also used inside seed keys
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherKind::Cold => "cold",
            WeatherKind::Mild => "mild",
            WeatherKind::Warm => "warm",
            WeatherKind::Rainy => "rainy",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeatherKind::Cold => "Cold",
            WeatherKind::Mild => "Mild",
            WeatherKind::Warm => "Warm",
            WeatherKind::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherKind {
    type Err = OutfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cold" => Ok(WeatherKind::Cold),
            "mild" => Ok(WeatherKind::Mild),
            "warm" => Ok(WeatherKind::Warm),
            "rainy" => Ok(WeatherKind::Rainy),
            other => Err(OutfindError::validation(format!(
                "unknown weather kind '{other}'"
            ))),
        }
    }
}

/// Current conditions as resolved by the weather collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Temperature in Celsius, always finite
    pub temperature_c: f64,
    /// Whether the provider reports any precipitation
    pub precipitation_flag: bool,
}

impl WeatherObservation {
    #[must_use]
    pub fn new(temperature_c: f64, precipitation_flag: bool) -> Self {
        Self {
            temperature_c,
            precipitation_flag,
        }
    }

    /// Build an observation from a provider temperature and WMO weather code
    #[must_use]
    pub fn from_weather_code(temperature_c: f64, weather_code: u16, precipitation_code_min: u16) -> Self {
        Self::new(temperature_c, weather_code >= precipitation_code_min)
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature_c)
    }
}
