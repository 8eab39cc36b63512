use chrono::{Datelike, NaiveDate, Timelike};
use chrono_tz::Asia::Dubai;
use chrono_tz::Europe::{London, Oslo};
use chrono_tz::Pacific::Kiritimati;

use flowstate::almanac::*;
use flowstate::error::Error;
use flowstate::types::Observer;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn minutes_of_day<T: Timelike>(t: &T) -> f64 {
    t.hour() as f64 * 60.0 + t.minute() as f64 + t.second() as f64 / 60.0
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_dubai_summer_solstice() {
    let obs = Observer::new(25.2048, 55.2708, Dubai).unwrap();
    let day = day_times(&obs, date(2026, 6, 21)).unwrap();
    assert!(!day.fallback);
    assert_approx!(minutes_of_day(&day.sunrise), 5.0 * 60.0 + 29.0, 3.0);
    assert_approx!(minutes_of_day(&day.solar_noon), 12.0 * 60.0 + 20.0, 3.0);
    assert_approx!(minutes_of_day(&day.sunset), 19.0 * 60.0 + 11.0, 3.0);
    assert!(day.sunrise < day.solar_noon && day.solar_noon < day.sunset);
}

#[test]
fn test_london_uses_summer_time() {
    let obs = Observer::new(51.5, -0.12, London).unwrap();
    let day = day_times(&obs, date(2026, 6, 21)).unwrap();
    assert_approx!(minutes_of_day(&day.sunrise), 4.0 * 60.0 + 43.0, 4.0);
    assert_approx!(minutes_of_day(&day.sunset), 21.0 * 60.0 + 21.0, 4.0);
}

#[test]
fn test_winter_day_shorter_than_summer_day() {
    let obs = Observer::new(25.2048, 55.2708, Dubai).unwrap();
    let summer = day_times(&obs, date(2026, 6, 21)).unwrap();
    let winter = day_times(&obs, date(2026, 12, 21)).unwrap();
    assert!((winter.sunset - winter.sunrise) < (summer.sunset - summer.sunrise));
}

#[test]
fn test_events_fall_on_requested_local_date() {
    let obs = Observer::new(1.87, -157.4, Kiritimati).unwrap();
    let d = date(2026, 6, 21);
    let day = day_times(&obs, d).unwrap();
    assert_eq!(day.solar_noon.date_naive(), d);
    assert_approx!(minutes_of_day(&day.solar_noon), 12.0 * 60.0 + 30.0, 20.0);
}

#[test]
fn test_polar_day_and_night_fail() {
    let obs = Observer::new(69.65, 18.96, Oslo).unwrap();
    for d in [date(2026, 6, 21), date(2026, 12, 21)] {
        match day_times(&obs, d) {
            Err(Error::NoSunriseSunset { date: failed, latitude }) => {
                assert_eq!(failed, d);
                assert_eq!(latitude, 69.65);
            }
            other => panic!("expected NoSunriseSunset, got {:?}", other),
        }
    }
}

#[test]
fn test_polar_fallback_uses_fixed_clock_times() {
    let obs = Observer::new(69.65, 18.96, Oslo).unwrap();
    let day = day_times_or_fallback(&obs, date(2026, 6, 21));
    assert!(day.fallback);
    assert_eq!((day.sunrise.hour(), day.sunrise.minute()), (6, 0));
    assert_eq!((day.solar_noon.hour(), day.solar_noon.minute()), (12, 0));
    assert_eq!((day.sunset.hour(), day.sunset.minute()), (18, 0));
    assert_eq!(day.sunrise.date_naive(), date(2026, 6, 21));
}

#[test]
fn test_fallback_not_used_when_sun_rises() {
    let obs = Observer::new(25.2048, 55.2708, Dubai).unwrap();
    let d = date(2026, 3, 20);
    assert_eq!(day_times_or_fallback(&obs, d), day_times(&obs, d).unwrap());
}

#[test]
fn test_local_at_survives_dst_gap() {
    // Clocks jump from 01:00 to 02:00 in London on 2026-03-29.
    let t = local_at(London, date(2026, 3, 29), 1, 30);
    assert_eq!(t.date_naive().day(), 29);
}

#[test]
fn test_celestial_presets() {
    assert_eq!(CelestialDate::SpringEquinox.date(2026).unwrap(), date(2026, 3, 20));
    assert_eq!(CelestialDate::SummerSolstice.date(2026).unwrap(), date(2026, 6, 21));
    assert_eq!(CelestialDate::AutumnalEquinox.date(2026).unwrap(), date(2026, 9, 22));
    assert_eq!(CelestialDate::WinterSolstice.date(2026).unwrap(), date(2026, 12, 21));
    assert_eq!(CelestialDate::ALL.len(), 4);
    assert_eq!(CelestialDate::SummerSolstice.label(), "Summer Solstice (Jun 21)");
}
