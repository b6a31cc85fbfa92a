//! OrbitView - Satellite Orbit Propagation Demo
//!
//! Loads a satellite catalog feed, propagates every tracked object once at
//! the requested evaluation time, and prints the resulting telemetry. This
//! is a stand-in for the rendering layer: a real consumer would call
//! [`orbitview::propagate`] per satellite per animation tick and apply the
//! returned position to a scene-graph transform.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use orbitview::{generate_orbit_track, load_catalog, propagate, OrbitalElements};

#[derive(Parser, Debug)]
#[command(name = "orbitview", about = "Propagate a satellite catalog and print telemetry")]
struct Args {
    /// Path to the catalog feed JSON ({"satcat_data": [...]})
    catalog: PathBuf,

    /// Evaluation time (RFC 3339, e.g. 2026-08-30T12:00:00Z); defaults to now
    #[arg(long)]
    time: Option<String>,

    /// Number of satellites to print
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Segment count for the example orbit track (at least 1)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    segments: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let now = match &args.time {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid evaluation time: {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let (satellites, stats) = load_catalog(&args.catalog)?;
    log::info!(
        "Propagating {} satellites at {}",
        stats.tracked,
        now.to_rfc3339()
    );

    println!(
        "{:<10} {:<24} {:>12} {:>10} {:>8} {:>9}",
        "NORAD", "NAME", "ALT (km)", "V (km/s)", "ORBITS", "PHASE (%)"
    );

    for sat in satellites.iter().take(args.limit) {
        let state = propagate(&sat.elements, now);
        println!(
            "{:<10} {:<24} {:>12.1} {:>10.2} {:>8} {:>9.2}",
            sat.norad_cat_id,
            sat.name,
            state.altitude_km,
            state.velocity_km_s,
            state.orbits_completed,
            state.percent_complete
        );
    }

    // One-time track generation, the way a renderer would build the ring.
    let iss = OrbitalElements::iss();
    let track = generate_orbit_track(&iss, args.segments);
    log::info!(
        "Example ISS orbit track: {} points at radius {:.3} scene units",
        track.len(),
        track[0].length()
    );

    Ok(())
}
