//! Engine settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on `cache_ttl_secs`: one week.
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Radius of the map circle the sun is projected onto, in meters.
    pub radius_m: f64,
    /// Sampling interval of the live sun path.
    pub path_step_minutes: u32,
    /// Sampling interval of the elevation profile.
    pub profile_step_minutes: u32,
    /// Sampling interval of the seasonal tracks.
    pub seasonal_step_minutes: u32,
    pub cache_ttl_secs: u64,
    /// Decimals kept when rounding coordinates into cache keys.
    pub cache_precision_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius_m: 250.0,
            path_step_minutes: 10,
            profile_step_minutes: 15,
            seasonal_step_minutes: 20,
            cache_ttl_secs: 600,
            cache_precision_decimals: 4,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        log::info!("Reading engine config from: {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(Error::Config(format!("radius_m must be positive, got {}", self.radius_m)));
        }
        for (name, step) in [
            ("path_step_minutes", self.path_step_minutes),
            ("profile_step_minutes", self.profile_step_minutes),
            ("seasonal_step_minutes", self.seasonal_step_minutes),
        ] {
            if !(1..=720).contains(&step) {
                return Err(Error::Config(format!("{name} must be in 1..=720, got {step}")));
            }
        }
        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(Error::Config(format!(
                "cache_ttl_secs must be at most {MAX_CACHE_TTL_SECS}, got {}",
                self.cache_ttl_secs
            )));
        }
        if self.cache_precision_decimals > 8 {
            return Err(Error::Config(format!(
                "cache_precision_decimals must be at most 8, got {}",
                self.cache_precision_decimals
            )));
        }
        Ok(())
    }
}
