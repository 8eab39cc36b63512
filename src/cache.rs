//! Time-limited cache of environmental samples keyed by rounded coordinates.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::config::EngineConfig;
use crate::environment::WeatherProvider;
use crate::error::{Error, Result};
use crate::types::EnvironmentalSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey {
    lat_q: i64,
    lon_q: i64,
}

impl LocationKey {
    pub fn quantize(lat: f64, lon: f64, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            lat_q: (lat * scale).round() as i64,
            lon_q: (lon * scale).round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    sample: EnvironmentalSample,
    fetched_at: DateTime<Utc>,
}

pub struct SampleCache {
    entries: HashMap<LocationKey, Entry>,
    ttl: Duration,
    decimals: u32,
}

impl SampleCache {
    pub fn new(ttl: Duration, decimals: u32) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            decimals,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let ttl = i64::try_from(config.cache_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                Error::Config(format!("cache_ttl_secs out of range: {}", config.cache_ttl_secs))
            })?;
        Ok(Self::new(ttl, config.cache_precision_decimals))
    }

    pub fn key(&self, lat: f64, lon: f64) -> LocationKey {
        LocationKey::quantize(lat, lon, self.decimals)
    }

    /// Fresh cached sample, if any.
    pub fn get(&self, lat: f64, lon: f64, now: DateTime<Utc>) -> Option<EnvironmentalSample> {
        let entry = self.entries.get(&self.key(lat, lon))?;
        if now - entry.fetched_at < self.ttl {
            Some(entry.sample)
        } else {
            None
        }
    }

    pub fn insert(&mut self, lat: f64, lon: f64, sample: EnvironmentalSample, now: DateTime<Utc>) {
        let key = self.key(lat, lon);
        self.entries.insert(
            key,
            Entry {
                sample,
                fetched_at: now,
            },
        );
    }

    pub fn get_or_fetch<P: WeatherProvider + ?Sized>(
        &mut self,
        provider: &P,
        lat: f64,
        lon: f64,
        now: DateTime<Utc>,
    ) -> EnvironmentalSample {
        if let Some(sample) = self.get(lat, lon, now) {
            log::debug!("environment cache hit for ({lat:.4}, {lon:.4})");
            return sample;
        }
        log::debug!("environment cache miss for ({lat:.4}, {lon:.4}), fetching");
        let sample = provider.sample(lat, lon);
        self.insert(lat, lon, sample, now);
        sample
    }

    /// Drops expired entries and returns how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, e| now - e.fetched_at < ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
