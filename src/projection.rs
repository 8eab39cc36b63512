//! Ground projection of compass bearings onto a circle around the observer.
//!
//! Uses an equirectangular approximation (one degree of latitude is taken as
//! 111 111 m), which is only meaningful for radii of a few hundred meters.

use crate::angles::deg_to_rad;
use crate::error::{Error, Result};
use crate::types::{Markers, Observer, ProjectedPoint};

pub const METERS_PER_DEGREE: f64 = 111_111.0;

/// Projection is refused beyond this absolute latitude; `cos(lat)` collapses.
pub const MAX_PROJECTION_LATITUDE: f64 = 89.9;

/// Shadow marker distance as a fraction of the circle radius.
pub const SHADOW_SCALE: f64 = 0.7;

/// Offsets `(lat, lon)` by `distance_m` along `bearing_deg` (clockwise from north).
pub fn offset_point(lat: f64, lon: f64, bearing_deg: f64, distance_m: f64) -> Result<ProjectedPoint> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(Error::NonFinite("observer coordinates"));
    }
    if !bearing_deg.is_finite() {
        return Err(Error::NonFinite("bearing"));
    }
    if !distance_m.is_finite() {
        return Err(Error::NonFinite("radius"));
    }
    if lat.abs() > MAX_PROJECTION_LATITUDE {
        return Err(Error::PolarLatitude(lat));
    }
    let bearing = deg_to_rad(bearing_deg);
    Ok(ProjectedPoint {
        lat: lat + (distance_m / METERS_PER_DEGREE) * bearing.cos(),
        lon: lon + (distance_m / (METERS_PER_DEGREE * deg_to_rad(lat).cos())) * bearing.sin(),
    })
}

/// Horizontal scale for the sun marker: `cos(max(0, elevation))`.
///
/// At or below the horizon the factor is 1, so the marker sits on the circle.
pub fn elevation_scale(elevation_deg: f64) -> f64 {
    deg_to_rad(elevation_deg.max(0.0)).cos()
}

pub fn sun_marker(
    observer: &Observer,
    azimuth_deg: f64,
    radius_m: f64,
    elevation_deg: f64,
) -> Result<ProjectedPoint> {
    offset_point(
        observer.latitude,
        observer.longitude,
        azimuth_deg,
        radius_m * elevation_scale(elevation_deg),
    )
}

/// Fixed-length marker opposite the sun; does not depend on elevation.
pub fn shadow_marker(observer: &Observer, azimuth_deg: f64, radius_m: f64) -> Result<ProjectedPoint> {
    offset_point(
        observer.latitude,
        observer.longitude,
        azimuth_deg + 180.0,
        radius_m * SHADOW_SCALE,
    )
}

pub fn project_point(
    observer: &Observer,
    azimuth_deg: f64,
    radius_m: f64,
    elevation_deg: f64,
) -> Result<Markers> {
    Ok(Markers {
        sun: sun_marker(observer, azimuth_deg, radius_m, elevation_deg)?,
        shadow: shadow_marker(observer, azimuth_deg, radius_m)?,
    })
}

/// Point on the circle boundary for an arbitrary bearing, without elevation
/// compensation.
pub fn get_edge(lat: f64, lon: f64, bearing_deg: f64, radius_m: f64) -> Result<ProjectedPoint> {
    offset_point(lat, lon, bearing_deg, radius_m)
}
