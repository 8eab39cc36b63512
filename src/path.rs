use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use rayon::prelude::*;

use crate::almanac::day_times_or_fallback;
use crate::angles::solar_position;
use crate::error::{Error, Result};
use crate::projection::{get_edge, project_point};
use crate::types::{
    DayTimes, ElevationSample, HorizonEdges, Observer, PathSample, ProjectedPoint, Season,
    SeasonalTrack,
};

/// Instants from `start` through `end` inclusive, `step_minutes` apart.
pub fn sample_times(start: DateTime<Tz>, end: DateTime<Tz>, step_minutes: u32) -> Vec<DateTime<Tz>> {
    let step = Duration::minutes(step_minutes.max(1) as i64);
    let mut times = Vec::new();
    let mut t = start;
    while t <= end {
        times.push(t);
        t += step;
    }
    times
}

pub fn path_sample(observer: &Observer, time: DateTime<Tz>, radius_m: f64) -> Result<PathSample> {
    let position = solar_position(observer, &time);
    let markers = project_point(observer, position.azimuth_deg, radius_m, position.elevation_deg)?;
    Ok(PathSample {
        time,
        position,
        markers,
    })
}

/// Sun and shadow markers from sunrise through sunset.
pub fn sample_day_path(
    observer: &Observer,
    day: &DayTimes,
    radius_m: f64,
    step_minutes: u32,
) -> Result<Vec<PathSample>> {
    sample_times(day.sunrise, day.sunset, step_minutes)
        .into_iter()
        .map(|t| path_sample(observer, t, radius_m))
        .collect()
}

pub fn elevation_profile(observer: &Observer, day: &DayTimes, step_minutes: u32) -> Vec<ElevationSample> {
    sample_times(day.sunrise, day.sunset, step_minutes)
        .into_iter()
        .map(|time| ElevationSample {
            time,
            elevation_deg: solar_position(observer, &time).elevation_deg,
        })
        .collect()
}

/// Circle-edge points in the sunrise and sunset directions.
pub fn horizon_edges(observer: &Observer, day: &DayTimes, radius_m: f64) -> Result<HorizonEdges> {
    let rise_az = solar_position(observer, &day.sunrise).azimuth_deg;
    let set_az = solar_position(observer, &day.sunset).azimuth_deg;
    Ok(HorizonEdges {
        sunrise: get_edge(observer.latitude, observer.longitude, rise_az, radius_m)?,
        sunset: get_edge(observer.latitude, observer.longitude, set_az, radius_m)?,
    })
}

impl Season {
    pub const MILESTONES: [Season; 4] = [Season::Summer, Season::Autumn, Season::Spring, Season::Winter];

    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => "Summer (June 21)",
            Season::Autumn => "Autumn (Oct 31)",
            Season::Spring => "Spring (March 20)",
            Season::Winter => "Winter (Dec 21)",
        }
    }

    pub fn milestone_date(self, year: i32) -> Result<NaiveDate> {
        let (month, day) = match self {
            Season::Summer => (6, 21),
            Season::Autumn => (10, 31),
            Season::Spring => (3, 20),
            Season::Winter => (12, 21),
        };
        NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
    }
}

fn seasonal_track(
    observer: &Observer,
    season: Season,
    year: i32,
    radius_m: f64,
    step_minutes: u32,
) -> Result<SeasonalTrack> {
    let date = season.milestone_date(year)?;
    let day = day_times_or_fallback(observer, date);
    let points = sample_day_path(observer, &day, radius_m, step_minutes)?
        .into_iter()
        .map(|s| s.markers.sun)
        .collect::<Vec<ProjectedPoint>>();
    Ok(SeasonalTrack {
        season,
        label: season.label(),
        date,
        points,
    })
}

/// Sun-marker tracks for the four seasonal milestones of `year`.
///
/// Milestones are independent and are computed in parallel.
pub fn seasonal_summary(
    observer: &Observer,
    year: i32,
    radius_m: f64,
    step_minutes: u32,
) -> Result<Vec<SeasonalTrack>> {
    Season::MILESTONES
        .par_iter()
        .map(|&season| seasonal_track(observer, season, year, radius_m, step_minutes))
        .collect()
}
