//! Weather classification
//!
//! Maps an observation onto one of the four weather buckets. Precipitation
//! wins over temperature; otherwise the bucket is decided by two fixed
//! thresholds.

use crate::models::{WeatherKind, WeatherObservation};

/// Below this temperature it is `Cold`
pub const COLD_BELOW_C: f64 = 15.0;
/// From this temperature on it is `Warm`
pub const WARM_FROM_C: f64 = 25.0;

/// Classify an observation into a weather bucket
#[must_use]
pub fn classify(observation: &WeatherObservation) -> WeatherKind {
    if observation.precipitation_flag {
        return WeatherKind::Rainy;
    }
    match observation.temperature_c {
        t if t < COLD_BELOW_C => WeatherKind::Cold,
        t if t < WARM_FROM_C => WeatherKind::Mild,
        _ => WeatherKind::Warm,
    }
}
