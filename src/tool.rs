//! Analysis tools a front end can select, each mapped onto the pure engine
//! functions.

use std::str::FromStr;

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::almanac::day_times_or_fallback;
use crate::angles::solar_position;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::irradiance::solar_radiation;
use crate::path::{elevation_profile, horizon_edges, path_sample, sample_day_path, seasonal_summary};
use crate::projection::project_point;
use crate::types::{
    AqiCategory, DayTimes, ElevationSample, EnvironmentalSample, HorizonEdges, Markers, Observer,
    PathSample, Reading, SeasonalTrack, SolarPosition, TrendPoint, WaterStressReport,
};
use crate::water_stress::{water_stress_report, wss_daily_trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tool {
    LocationSetup,
    LivePath,
    YearSummary,
    WaterStress,
    CondensateEstimate,
    DesalinationNexus,
    WaterQuality,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::LocationSetup,
        Tool::LivePath,
        Tool::YearSummary,
        Tool::WaterStress,
        Tool::CondensateEstimate,
        Tool::DesalinationNexus,
        Tool::WaterQuality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::LocationSetup => "location-setup",
            Tool::LivePath => "live-path",
            Tool::YearSummary => "year-summary",
            Tool::WaterStress => "water-stress",
            Tool::CondensateEstimate => "condensate-estimate",
            Tool::DesalinationNexus => "desalination-nexus",
            Tool::WaterQuality => "water-quality",
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

/// Everything a tool may need; the caller gathers it up front.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub observer: Observer,
    pub time: DateTime<Tz>,
    pub environment: EnvironmentalSample,
    pub config: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSummary {
    pub position: SolarPosition,
    pub radiation_wm2: f64,
    pub markers: Option<Markers>,
    pub day: DayTimes,
    pub elevation_profile: Vec<ElevationSample>,
    pub environment: EnvironmentalSample,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LivePath {
    pub day: DayTimes,
    pub samples: Vec<PathSample>,
    pub edges: HorizonEdges,
    pub current: PathSample,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterStressView {
    pub radiation_wm2: f64,
    pub temperature_c: Reading,
    pub humidity_pct: Reading,
    pub report: WaterStressReport,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQuality {
    pub category: AqiCategory,
    pub label: &'static str,
    pub color: &'static str,
}

impl AirQuality {
    pub fn of(sample: &EnvironmentalSample) -> Self {
        let category = sample.aqi_category();
        Self {
            category,
            label: category.label(),
            color: category.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ToolOutput {
    LocationSetup(LocationSummary),
    LivePath(LivePath),
    YearSummary(Vec<SeasonalTrack>),
    WaterStress(WaterStressView),
}

pub fn dispatch(tool: Tool, request: &ToolRequest) -> Result<ToolOutput> {
    let observer = &request.observer;
    let config = &request.config;
    let date = request.time.date_naive();
    log::debug!("dispatching {} for ({}, {})", tool.name(), observer.latitude, observer.longitude);

    match tool {
        Tool::LocationSetup => {
            let position = solar_position(observer, &request.time);
            let day = day_times_or_fallback(observer, date);
            // Near the poles the map projection is undefined; the rest still holds.
            let markers = match project_point(
                observer,
                position.azimuth_deg,
                config.radius_m,
                position.elevation_deg,
            ) {
                Ok(markers) => Some(markers),
                Err(e) => {
                    log::warn!("no map markers: {e}");
                    None
                }
            };
            Ok(ToolOutput::LocationSetup(LocationSummary {
                position,
                radiation_wm2: solar_radiation(position.elevation_deg),
                markers,
                day,
                elevation_profile: elevation_profile(observer, &day, config.profile_step_minutes),
                environment: request.environment,
                air_quality: AirQuality::of(&request.environment),
            }))
        }
        Tool::LivePath => {
            let day = day_times_or_fallback(observer, date);
            Ok(ToolOutput::LivePath(LivePath {
                day,
                samples: sample_day_path(observer, &day, config.radius_m, config.path_step_minutes)?,
                edges: horizon_edges(observer, &day, config.radius_m)?,
                current: path_sample(observer, request.time, config.radius_m)?,
            }))
        }
        Tool::YearSummary => Ok(ToolOutput::YearSummary(seasonal_summary(
            observer,
            date.year(),
            config.radius_m,
            config.seasonal_step_minutes,
        )?)),
        Tool::WaterStress => {
            let position = solar_position(observer, &request.time);
            let ghi = solar_radiation(position.elevation_deg);
            let env = request.environment;
            let report = water_stress_report(ghi, env.temperature_c, env.humidity_pct);
            Ok(ToolOutput::WaterStress(WaterStressView {
                radiation_wm2: ghi,
                temperature_c: env.temperature_c,
                humidity_pct: env.humidity_pct,
                trend: wss_daily_trend(report.score),
                report,
            }))
        }
        Tool::CondensateEstimate | Tool::DesalinationNexus | Tool::WaterQuality => {
            Err(Error::ToolUnavailable(tool))
        }
    }
}
