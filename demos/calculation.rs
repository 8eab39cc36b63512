use chrono::TimeZone;
use chrono_tz::Asia::Dubai;

use flowstate::{
    calculate_wss_breakdown, classify_wss, day_times_or_fallback, get_edge, project_point,
    solar_position, solar_radiation, Observer,
};

fn main() -> flowstate::Result<()> {
    let observer = Observer::new(25.2048, 55.2708, Dubai)?;
    let dt = Dubai
        .with_ymd_and_hms(2026, 6, 21, 13, 0, 0)
        .single()
        .ok_or_else(|| flowstate::Error::AmbiguousLocalTime("2026-06-21 13:00".into()))?;

    let pos = solar_position(&observer, &dt);
    let markers = project_point(&observer, pos.azimuth_deg, 250.0, pos.elevation_deg)?;
    let day = day_times_or_fallback(&observer, dt.date_naive());
    let ghi = solar_radiation(pos.elevation_deg);
    let (score, breakdown) = calculate_wss_breakdown(ghi, 41.0, 35.0);
    let res = classify_wss(score);

    println!("=== Solar Position & Water Stress Example ===");
    println!(
        "Location: Dubai ({:.4}°N, {:.4}°E)",
        observer.latitude, observer.longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun ---");
    println!("Sunrise: {}", day.sunrise.format("%H:%M"));
    println!("Solar noon: {}", day.solar_noon.format("%H:%M"));
    println!("Sunset: {}", day.sunset.format("%H:%M"));
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth_deg);
    println!("Elevation: {:.2}°", pos.elevation_deg);
    println!("Irradiance: {} W/m²", ghi);
    println!("Sun marker: ({:.6}, {:.6})", markers.sun.lat, markers.sun.lon);
    println!("Shadow marker: ({:.6}, {:.6})", markers.shadow.lat, markers.shadow.lon);
    let east = get_edge(observer.latitude, observer.longitude, 90.0, 250.0)?;
    println!("East edge: ({:.6}, {:.6})", east.lat, east.lon);
    println!();
    println!("--- Water Stress ---");
    println!("Score: {} / 100 ({})", score, res.tier);
    println!(
        "Breakdown: solar {:.1}%, temperature {:.1}%, ET {:.1}%, humidity {:.1}%",
        breakdown.solar, breakdown.temperature, breakdown.evapotranspiration, breakdown.humidity_deficit
    );
    for action in res.recommended_actions {
        println!("  - {}", action);
    }
    println!(
        "Savings: water {}%, cost {}, evaporation {}%",
        res.savings.water_pct,
        res.savings.cost_label(),
        res.savings.evap_pct
    );
    Ok(())
}
