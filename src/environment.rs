//! Boundary to the external weather, geocoding and timezone services.
//!
//! Implementations live outside this crate. They report failures as
//! `Reading::Unavailable` or `None`, never as errors into the core.

use chrono_tz::Tz;

use crate::types::{AqiCategory, EnvironmentalSample, Reading};

pub trait WeatherProvider {
    /// Current conditions near `(lat, lon)`. Fields the service could not
    /// supply are `Reading::Unavailable`.
    fn sample(&self, lat: f64, lon: f64) -> EnvironmentalSample;
}

pub trait Geocoder {
    fn search_city(&self, name: &str) -> Option<(f64, f64)>;
}

pub trait TimezoneResolver {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<Tz>;

    /// UTC when the location has no known zone.
    fn timezone_or_utc(&self, lat: f64, lon: f64) -> Tz {
        self.timezone_at(lat, lon).unwrap_or(Tz::UTC)
    }
}

/// Resolves every location to one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimezone(pub Tz);

impl TimezoneResolver for FixedTimezone {
    fn timezone_at(&self, _lat: f64, _lon: f64) -> Option<Tz> {
        Some(self.0)
    }
}

impl AqiCategory {
    /// US AQI breakpoints: 50, 100, 150.
    pub fn classify(aqi: Reading) -> Self {
        match aqi.value() {
            None => AqiCategory::Unknown,
            Some(v) if v <= 50.0 => AqiCategory::Good,
            Some(v) if v <= 100.0 => AqiCategory::Moderate,
            Some(v) if v <= 150.0 => AqiCategory::UnhealthySensitive,
            Some(_) => AqiCategory::Unhealthy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy(S)",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::Unknown => "Unknown",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "#00e400",
            AqiCategory::Moderate => "#ffff00",
            AqiCategory::UnhealthySensitive => "#ff7e00",
            AqiCategory::Unhealthy => "#ff0000",
            AqiCategory::Unknown => "#444",
        }
    }
}

impl EnvironmentalSample {
    pub fn aqi_category(&self) -> AqiCategory {
        AqiCategory::classify(self.aqi)
    }
}
