pub mod almanac;
pub mod angles;
pub mod cache;
pub mod config;
pub mod environment;
pub mod error;
pub mod irradiance;
pub mod path;
pub mod projection;
pub mod tool;
pub mod types;
pub mod water_stress;

pub use almanac::{day_times, day_times_or_fallback, fallback_day_times, local_at, CelestialDate};

pub use angles::{
    day_of_year, deg_to_rad, equation_of_time, hour_angle, hour_angle_at_elevation,
    normalize_angle, rad_to_deg, solar_azimuth, solar_declination, solar_elevation,
    solar_position, solar_zenith_angle, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use cache::{LocationKey, SampleCache};
pub use config::EngineConfig;
pub use environment::{FixedTimezone, Geocoder, TimezoneResolver, WeatherProvider};
pub use error::{Error, Result};
pub use irradiance::{air_mass, solar_radiation};

pub use path::{
    elevation_profile, horizon_edges, path_sample, sample_day_path, sample_times, seasonal_summary,
};

pub use projection::{
    elevation_scale, get_edge, offset_point, project_point, shadow_marker, sun_marker,
    METERS_PER_DEGREE,
};

pub use tool::{dispatch, AirQuality, Tool, ToolOutput, ToolRequest};

pub use types::{
    AqiCategory, DayTimes, ElevationSample, EnvironmentalSample, HorizonEdges, Markers,
    NormalizedInputs, Observer, PathSample, ProjectedPoint, Reading, RiskTier, Savings, Season,
    SeasonalTrack, SolarPosition, TrendPoint, WaterStressReport, WssBreakdown, WssClassification,
};

pub use water_stress::{
    calculate_wss_breakdown, classify_wss, estimate_evapotranspiration, normalize_inputs,
    water_stress_report, wss_daily_trend,
};
