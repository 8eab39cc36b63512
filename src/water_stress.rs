//! Water Stress Score (WSS): a 0-100 composite of solar load, heat,
//! evapotranspiration and dryness, plus its risk-tier lookup.

use crate::irradiance::round2;
use crate::types::{
    NormalizedInputs, Reading, RiskTier, Savings, TrendPoint, WaterStressReport, WssBreakdown,
    WssClassification,
};

pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
pub const DEFAULT_GHI: f64 = 0.0;
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

pub const SOLAR_WEIGHT: f64 = 0.35;
pub const TEMPERATURE_WEIGHT: f64 = 0.25;
pub const ET_WEIGHT: f64 = 0.25;
pub const HUMIDITY_WEIGHT: f64 = 0.15;

pub const MODERATE_THRESHOLD: f64 = 40.0;
pub const EXTREME_THRESHOLD: f64 = 70.0;

fn unit_clamp(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}

/// Scales raw readings into [0, 1]: GHI over 800 W/m², temperature over the
/// 10-40 °C band, humidity over 100 %, ET over 8 mm/day.
pub fn normalize_inputs(ghi: f64, temp: f64, humidity: f64, et: f64) -> NormalizedInputs {
    NormalizedInputs {
        solar: unit_clamp(ghi / 800.0),
        temperature: unit_clamp((temp - 10.0) / 30.0),
        humidity: unit_clamp(humidity / 100.0),
        evapotranspiration: unit_clamp(et / 8.0),
    }
}

/// Simplified Hargreaves-style ET proxy (mm/day) from GHI and temperature.
/// Wind is not part of the estimate.
pub fn estimate_evapotranspiration(ghi: f64, temp: f64) -> f64 {
    (0.0023 * ghi * (temp + 17.8)) / 50.0
}

/// Coerces the three readings, falling back to the documented defaults for
/// all of them when any one is missing.
fn coerce_readings(ghi: Reading, temp: Reading, humidity: Reading) -> (f64, f64, f64) {
    match (ghi.value(), temp.value(), humidity.value()) {
        (Some(g), Some(t), Some(h)) => (g, t, h),
        _ => {
            log::debug!(
                "unusable WSS inputs (ghi={ghi}, temp={temp}, humidity={humidity}), using defaults"
            );
            (DEFAULT_GHI, DEFAULT_TEMPERATURE_C, DEFAULT_HUMIDITY_PCT)
        }
    }
}

fn breakdown_for(ghi: f64, temp: f64, humidity: f64) -> (f64, WssBreakdown, f64) {
    let et = estimate_evapotranspiration(ghi, temp);
    let n = normalize_inputs(ghi, temp, humidity, et);
    // Dryness drives stress, so the humidity contribution is inverted.
    let breakdown = WssBreakdown {
        solar: SOLAR_WEIGHT * n.solar * 100.0,
        temperature: TEMPERATURE_WEIGHT * n.temperature * 100.0,
        evapotranspiration: ET_WEIGHT * n.evapotranspiration * 100.0,
        humidity_deficit: HUMIDITY_WEIGHT * (1.0 - n.humidity) * 100.0,
    };
    let score = round2(
        breakdown.solar
            + breakdown.temperature
            + breakdown.evapotranspiration
            + breakdown.humidity_deficit,
    );
    (score, breakdown, et)
}

/// Returns the rounded score and its unrounded per-factor contributions.
/// Never fails; unusable readings are replaced by defaults.
pub fn calculate_wss_breakdown(
    ghi: impl Into<Reading>,
    temp: impl Into<Reading>,
    humidity: impl Into<Reading>,
) -> (f64, WssBreakdown) {
    let (g, t, h) = coerce_readings(ghi.into(), temp.into(), humidity.into());
    let (score, breakdown, _) = breakdown_for(g, t, h);
    (score, breakdown)
}

const LOW_ACTIONS: &[&str] = &[
    "Maintain standard schedule",
    "Monitor soil moisture",
    "Check for pipe leaks",
];

const MODERATE_ACTIONS: &[&str] = &[
    "Shift watering to 6:30 PM",
    "Reduce non-essential use",
    "Check mulch layers",
];

const EXTREME_ACTIONS: &[&str] = &[
    "Reduce irrigation by 40%",
    "Activate drip-only mode",
    "Use recycled water only",
];

pub fn tier_for_score(score: f64) -> RiskTier {
    if score < MODERATE_THRESHOLD {
        RiskTier::Low
    } else if score < EXTREME_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Extreme
    }
}

pub fn classify_wss(score: f64) -> WssClassification {
    match tier_for_score(score) {
        RiskTier::Low => WssClassification {
            tier: RiskTier::Low,
            color: "#2ecc71",
            recommended_actions: LOW_ACTIONS,
            savings: Savings {
                water_pct: 5,
                cost_aed: 150,
                evap_pct: 5,
            },
        },
        RiskTier::Moderate => WssClassification {
            tier: RiskTier::Moderate,
            color: "#f39c12",
            recommended_actions: MODERATE_ACTIONS,
            savings: Savings {
                water_pct: 15,
                cost_aed: 450,
                evap_pct: 12,
            },
        },
        RiskTier::Extreme => WssClassification {
            tier: RiskTier::Extreme,
            color: "#e74c3c",
            recommended_actions: EXTREME_ACTIONS,
            savings: Savings {
                water_pct: 28,
                cost_aed: 1250,
                evap_pct: 22,
            },
        },
    }
}

pub fn water_stress_report(
    ghi: impl Into<Reading>,
    temp: impl Into<Reading>,
    humidity: impl Into<Reading>,
) -> WaterStressReport {
    let (g, t, h) = coerce_readings(ghi.into(), temp.into(), humidity.into());
    let (score, breakdown, et) = breakdown_for(g, t, h);
    WaterStressReport {
        score,
        evapotranspiration_mm: et,
        breakdown,
        classification: classify_wss(score),
    }
}

const TREND_SLOTS: [(&str, f64); 6] = [
    ("12 AM", 0.6),
    ("4 AM", 0.5),
    ("8 AM", 0.8),
    ("12 PM", 1.1),
    ("4 PM", 1.0),
    ("8 PM", 0.7),
];

/// Illustrative intraday curve scaled from a single score.
pub fn wss_daily_trend(score: f64) -> Vec<TrendPoint> {
    TREND_SLOTS
        .iter()
        .map(|&(label, factor)| TrendPoint {
            label,
            score: score * factor,
        })
        .collect()
}
