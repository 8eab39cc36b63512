use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::types::{Observer, SolarPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_elevation(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Hour angle (degrees, positive) at which the sun centre crosses `elevation`.
///
/// Returns `None` when the sun stays entirely above (polar day) or below
/// (polar night) that elevation for the whole day.
pub fn hour_angle_at_elevation(latitude: f64, declination: f64, elevation: f64) -> Option<f64> {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = (deg_to_rad(elevation).sin() - lat_rad.sin() * dec_rad.sin())
        / (lat_rad.cos() * dec_rad.cos());
    if !cos_h.is_finite() || cos_h.abs() > 1.0 {
        return None;
    }
    Some(rad_to_deg(cos_h.acos()))
}

fn utc_fractional_hours(utc: &DateTime<Utc>) -> f64 {
    utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + (utc.second() as f64 + utc.nanosecond() as f64 / 1e9) / 3600.0
}

/// Sun position for `observer` at `dt`. The instant is normalized to UTC, so
/// any zone yields the same answer for the same instant.
pub fn solar_position<Tz: TimeZone>(observer: &Observer, dt: &DateTime<Tz>) -> SolarPosition {
    let utc = dt.with_timezone(&Utc);
    let n = day_of_year(utc.year(), utc.month(), utc.day());
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let correction = utc_lst_correction(observer.longitude, eot);
    let lst = (utc_fractional_hours(&utc) + correction).rem_euclid(24.0);
    let ha = hour_angle(lst);
    let zenith = solar_zenith_angle(observer.latitude, decl, ha);
    SolarPosition {
        azimuth_deg: solar_azimuth(observer.latitude, decl, ha),
        elevation_deg: solar_elevation(zenith),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_never_returns_full_turn() {
        assert_eq!(normalize_angle(-1e-18), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
    }

    #[test]
    fn crossing_missing_in_polar_summer() {
        assert!(hour_angle_at_elevation(80.0, 23.0, -0.8333).is_none());
        assert!(hour_angle_at_elevation(-80.0, 23.0, -0.8333).is_none());
        assert!(hour_angle_at_elevation(40.0, 23.0, -0.8333).is_some());
    }
}
