use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use flowstate::{
    calculate_wss_breakdown, classify_wss, day_times_or_fallback, dispatch, get_edge,
    horizon_edges, project_point, sample_day_path, seasonal_summary, solar_position,
    solar_radiation, wss_daily_trend, EngineConfig, EnvironmentalSample, Error, Observer, Reading,
    Result, Tool, ToolRequest,
};

#[derive(Parser)]
#[command(name = "flowstate", about = "Sun position, irradiance and water stress")]
struct Cli {
    /// JSON engine config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Location {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// IANA timezone, e.g. Asia/Dubai
    #[arg(long, default_value = "UTC")]
    tz: Tz,
}

impl Location {
    fn observer(&self) -> Result<Observer> {
        Observer::new(self.lat, self.lon, self.tz)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sun azimuth/elevation, irradiance and map markers
    Position {
        #[command(flatten)]
        location: Location,
        /// Local time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        time: String,
    },
    /// Irradiance for a solar elevation
    Radiation {
        /// Elevation in degrees
        #[arg(allow_hyphen_values = true)]
        elevation: f64,
    },
    /// Water stress score; readings may be "N/A"
    Score {
        #[arg(long)]
        ghi: String,
        #[arg(long)]
        temp: String,
        #[arg(long)]
        humidity: String,
    },
    /// Circle edge point for a bearing
    Edge {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Compass bearing in degrees, clockwise from north
        #[arg(long, allow_hyphen_values = true)]
        bearing: f64,
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Sun path from sunrise to sunset
    Path {
        #[command(flatten)]
        location: Location,
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Seasonal milestone tracks
    Seasons {
        #[command(flatten)]
        location: Location,
        #[arg(long)]
        year: i32,
    },
    /// Run one analysis tool
    Tool {
        /// location-setup, live-path, year-summary, water-stress, ...
        tool: Tool,
        #[command(flatten)]
        location: Location,
        /// Local time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "N/A")]
        temp: String,
        #[arg(long, default_value = "N/A")]
        humidity: String,
        #[arg(long, default_value = "N/A")]
        aqi: String,
    },
}

fn parse_local(tz: Tz, raw: &str) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| Error::Config(format!("bad time '{raw}': {e}")))?;
    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| Error::AmbiguousLocalTime(format!("{raw} in {tz}")))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Position { location, time } => {
            let observer = location.observer()?;
            let dt = parse_local(observer.timezone, &time)?;
            let pos = solar_position(&observer, &dt);
            let markers = project_point(&observer, pos.azimuth_deg, config.radius_m, pos.elevation_deg)?;
            print_json(&serde_json::json!({
                "time": dt,
                "position": pos,
                "radiation_wm2": solar_radiation(pos.elevation_deg),
                "markers": markers,
            }))
        }
        Commands::Radiation { elevation } => print_json(&solar_radiation(elevation)),
        Commands::Score { ghi, temp, humidity } => {
            let (score, breakdown) = calculate_wss_breakdown(
                Reading::parse(&ghi),
                Reading::parse(&temp),
                Reading::parse(&humidity),
            );
            let classification = classify_wss(score);
            print_json(&serde_json::json!({
                "score": score,
                "breakdown": breakdown,
                "classification": classification,
                "cost_saving": classification.savings.cost_label(),
                "trend": wss_daily_trend(score),
            }))
        }
        Commands::Edge { lat, lon, bearing, radius } => {
            print_json(&get_edge(lat, lon, bearing, radius.unwrap_or(config.radius_m))?)
        }
        Commands::Path { location, date } => {
            let observer = location.observer()?;
            let day = day_times_or_fallback(&observer, date);
            print_json(&serde_json::json!({
                "day": day,
                "edges": horizon_edges(&observer, &day, config.radius_m)?,
                "samples": sample_day_path(&observer, &day, config.radius_m, config.path_step_minutes)?,
            }))
        }
        Commands::Seasons { location, year } => {
            let observer = location.observer()?;
            print_json(&seasonal_summary(
                &observer,
                year,
                config.radius_m,
                config.seasonal_step_minutes,
            )?)
        }
        Commands::Tool {
            tool,
            location,
            time,
            temp,
            humidity,
            aqi,
        } => {
            let observer = location.observer()?;
            let request = ToolRequest {
                observer,
                time: parse_local(observer.timezone, &time)?,
                environment: EnvironmentalSample {
                    temperature_c: Reading::parse(&temp),
                    humidity_pct: Reading::parse(&humidity),
                    wind_ms: Reading::Unavailable,
                    aqi: Reading::parse(&aqi),
                },
                config,
            };
            print_json(&dispatch(tool, &request)?)
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
