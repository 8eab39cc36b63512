//! Sunrise, sunset and solar noon per calendar date.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::angles::{
    day_of_year, equation_of_time, hour_angle_at_elevation, solar_declination,
    utc_lst_correction, DEGREES_PER_HOUR,
};
use crate::error::{Error, Result};
use crate::types::{DayTimes, Observer};

/// Sun centre depression at sunrise/sunset: 34' refraction plus 16' semidiameter.
pub const SUNRISE_DEPRESSION_DEG: f64 = 50.0 / 60.0;

pub const FALLBACK_SUNRISE: (u32, u32) = (6, 0);
pub const FALLBACK_SUNSET: (u32, u32) = (18, 0);
pub const FALLBACK_NOON: (u32, u32) = (12, 0);

fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * 3_600_000.0).round() as i64)
}

/// Wall-clock time on `date` in `tz`. Skipped local times (DST gaps) are read
/// as UTC so this never fails.
pub fn local_at(tz: Tz, date: NaiveDate, hour: u32, minute: u32) -> DateTime<Tz> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::default());
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Solar noon in UTC whose local date is `date`.
fn solar_noon_utc(observer: &Observer, date: NaiveDate, correction_h: f64) -> DateTime<Utc> {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
    let nominal = midnight + hours(12.0 - correction_h);
    [0i64, -1, 1]
        .into_iter()
        .map(|k| nominal + Duration::days(k))
        .find(|t| t.with_timezone(&observer.timezone).date_naive() == date)
        .unwrap_or(nominal)
}

/// Almanac times for `date` in the observer's zone.
///
/// Fails with `NoSunriseSunset` during polar day or polar night.
pub fn day_times(observer: &Observer, date: NaiveDate) -> Result<DayTimes> {
    let n = day_of_year(date.year(), date.month(), date.day());
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let correction = utc_lst_correction(observer.longitude, eot);
    let noon = solar_noon_utc(observer, date, correction);

    let half_day_deg = hour_angle_at_elevation(observer.latitude, decl, -SUNRISE_DEPRESSION_DEG)
        .ok_or_else(|| Error::NoSunriseSunset {
            date,
            latitude: observer.latitude,
        })?;
    let half_day = hours(half_day_deg / DEGREES_PER_HOUR);

    let tz = observer.timezone;
    Ok(DayTimes {
        sunrise: (noon - half_day).with_timezone(&tz),
        sunset: (noon + half_day).with_timezone(&tz),
        solar_noon: noon.with_timezone(&tz),
        fallback: false,
    })
}

pub fn fallback_day_times(tz: Tz, date: NaiveDate) -> DayTimes {
    DayTimes {
        sunrise: local_at(tz, date, FALLBACK_SUNRISE.0, FALLBACK_SUNRISE.1),
        sunset: local_at(tz, date, FALLBACK_SUNSET.0, FALLBACK_SUNSET.1),
        solar_noon: local_at(tz, date, FALLBACK_NOON.0, FALLBACK_NOON.1),
        fallback: true,
    }
}

/// Like [`day_times`] but substitutes 06:00 / 18:00 / 12:00 local when the
/// sun does not rise or set.
pub fn day_times_or_fallback(observer: &Observer, date: NaiveDate) -> DayTimes {
    match day_times(observer, date) {
        Ok(times) => times,
        Err(e) => {
            log::warn!("{e}; using fixed fallback times");
            fallback_day_times(observer.timezone, date)
        }
    }
}

/// Preset dates offered next to manual date selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialDate {
    SpringEquinox,
    SummerSolstice,
    AutumnalEquinox,
    WinterSolstice,
}

impl CelestialDate {
    pub const ALL: [CelestialDate; 4] = [
        CelestialDate::SpringEquinox,
        CelestialDate::SummerSolstice,
        CelestialDate::AutumnalEquinox,
        CelestialDate::WinterSolstice,
    ];

    pub fn month_day(self) -> (u32, u32) {
        match self {
            CelestialDate::SpringEquinox => (3, 20),
            CelestialDate::SummerSolstice => (6, 21),
            CelestialDate::AutumnalEquinox => (9, 22),
            CelestialDate::WinterSolstice => (12, 21),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CelestialDate::SpringEquinox => "Spring Equinox (Mar 20)",
            CelestialDate::SummerSolstice => "Summer Solstice (Jun 21)",
            CelestialDate::AutumnalEquinox => "Autumnal Equinox (Sep 22)",
            CelestialDate::WinterSolstice => "Winter Solstice (Dec 21)",
        }
    }

    pub fn date(self, year: i32) -> Result<NaiveDate> {
        let (month, day) = self.month_day();
        NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
    }
}
