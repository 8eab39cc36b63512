//! Clear-sky irradiance from solar elevation.

use crate::angles::deg_to_rad;

/// Solar constant, W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;
pub const BASE_TRANSMISSION: f64 = 0.7;
const AIR_MASS_EXPONENT: f64 = 0.678;
/// Keeps air mass bounded (about 1000) as elevation approaches zero.
const AIR_MASS_EPSILON: f64 = 0.001;

pub fn air_mass(elevation_deg: f64) -> f64 {
    1.0 / (deg_to_rad(elevation_deg).sin() + AIR_MASS_EPSILON)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated global horizontal irradiance in W/m², rounded to 2 decimals.
///
/// Exactly zero at or below the horizon.
pub fn solar_radiation(elevation_deg: f64) -> f64 {
    if elevation_deg.is_nan() || elevation_deg <= 0.0 {
        return 0.0;
    }
    let elevation_deg = elevation_deg.min(90.0);
    let el_rad = deg_to_rad(elevation_deg);
    let transmission = BASE_TRANSMISSION.powf(air_mass(elevation_deg).powf(AIR_MASS_EXPONENT));
    round2(SOLAR_CONSTANT * el_rad.sin() * transmission)
}
