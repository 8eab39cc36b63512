//! Error types for the flowstate engine.

use chrono::NaiveDate;
use thiserror::Error;

use crate::tool::Tool;

#[derive(Debug, Error)]
pub enum Error {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),

    /// Equirectangular projection is undefined this close to a pole.
    #[error("latitude {0} too close to a pole for ground projection")]
    PolarLatitude(f64),

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("no sunrise or sunset on {date} at latitude {latitude}")]
    NoSunriseSunset { date: NaiveDate, latitude: f64 },

    #[error("invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("local time does not exist or is ambiguous: {0}")]
    AmbiguousLocalTime(String),

    #[error("tool {0:?} has no computation")]
    ToolUnavailable(Tool),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
