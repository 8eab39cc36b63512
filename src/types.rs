use std::fmt;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A point on the ground from which the sun is observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
}

impl Observer {
    /// Validates the coordinate ranges; latitude in [-90, 90], longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64, timezone: Tz) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            timezone,
        })
    }

    pub fn utc(latitude: f64, longitude: f64) -> Result<Self> {
        Self::new(latitude, longitude, Tz::UTC)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// Clockwise from true north, in [0, 360).
    pub azimuth_deg: f64,
    /// Negative when the sun is below the horizon.
    pub elevation_deg: f64,
}

impl SolarPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.elevation_deg > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Map markers for one instant: the sun's projection on the circle and the
/// shadow marker opposite it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Markers {
    pub sun: ProjectedPoint,
    pub shadow: ProjectedPoint,
}

/// A weather value that may be missing when the upstream service fails.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reading {
    Value(f64),
    #[default]
    Unavailable,
}

impl Reading {
    /// NaN counts as missing. Infinities pass through and are bounded by the
    /// consumers' clamps.
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) if !v.is_nan() => Some(v),
            _ => None,
        }
    }

    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Reading::Value)
            .unwrap_or(Reading::Unavailable)
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Reading::Value(v)
    }
}

impl From<Option<f64>> for Reading {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Reading::Unavailable, Reading::Value)
    }
}

impl From<&str> for Reading {
    fn from(raw: &str) -> Self {
        Reading::parse(raw)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("N/A"),
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.value() {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str("N/A"),
        }
    }
}

/// Ambient conditions supplied by the weather collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnvironmentalSample {
    pub temperature_c: Reading,
    pub humidity_pct: Reading,
    pub wind_ms: Reading,
    pub aqi: Reading,
}

impl EnvironmentalSample {
    pub fn new(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_c: Reading::Value(temperature_c),
            humidity_pct: Reading::Value(humidity_pct),
            wind_ms: Reading::Unavailable,
            aqi: Reading::Unavailable,
        }
    }

    /// The sample handed out when the weather service cannot be reached.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedInputs {
    pub solar: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub evapotranspiration: f64,
}

/// Weighted percentage contributions to the water stress score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WssBreakdown {
    pub solar: f64,
    pub temperature: f64,
    pub evapotranspiration: f64,
    pub humidity_deficit: f64,
}

impl WssBreakdown {
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.solar,
            self.temperature,
            self.evapotranspiration,
            self.humidity_deficit,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    Low,
    Moderate,
    Extreme,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Savings {
    pub water_pct: u8,
    pub cost_aed: u32,
    pub evap_pct: u8,
}

impl Savings {
    /// Monthly cost saving with thousands separators, e.g. `AED 1,250`.
    pub fn cost_label(&self) -> String {
        let digits = self.cost_aed.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("AED {grouped}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WssClassification {
    pub tier: RiskTier,
    pub color: &'static str,
    pub recommended_actions: &'static [&'static str],
    pub savings: Savings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterStressReport {
    pub score: f64,
    pub evapotranspiration_mm: f64,
    pub breakdown: WssBreakdown,
    pub classification: WssClassification,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: &'static str,
    pub score: f64,
}

/// Sunrise, sunset and solar noon for one calendar date, in the observer's zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub solar_noon: DateTime<Tz>,
    /// Set when the almanac failed and fixed clock times were substituted.
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSample {
    pub time: DateTime<Tz>,
    pub position: SolarPosition,
    pub markers: Markers,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationSample {
    pub time: DateTime<Tz>,
    pub elevation_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonEdges {
    pub sunrise: ProjectedPoint,
    pub sunset: ProjectedPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Summer,
    Autumn,
    Spring,
    Winter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalTrack {
    pub season: Season,
    pub label: &'static str,
    pub date: NaiveDate,
    pub points: Vec<ProjectedPoint>,
}
