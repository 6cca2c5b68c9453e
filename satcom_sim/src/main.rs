//! SatCom Scenario CLI
//!
//! Build a constellation topology and print or export its summary.

use clap::Parser;
use satcom_sim::{Constellation, ConstellationConfig, SimError, TopologyReport};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// SatCom topology scenario builder
#[derive(Parser, Debug)]
#[command(name = "satcom-sim")]
#[command(about = "Build a satellite-communication topology scenario", long_about = None)]
struct Args {
    /// Seed for user terminal placement
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of orbital planes
    #[arg(short, long, default_value = "6")]
    planes: usize,

    /// Satellites per plane
    #[arg(long, default_value = "11")]
    per_plane: usize,

    /// Orbit altitude in kilometers
    #[arg(long, default_value = "780")]
    altitude_km: f64,

    /// Orbit inclination in degrees
    #[arg(long, default_value = "86.4")]
    inclination: f64,

    /// Number of ground stations (gateway sites)
    #[arg(short, long, default_value = "4")]
    ground_stations: usize,

    /// Number of user terminals
    #[arg(short, long, default_value = "12")]
    user_terminals: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output on stdout
    #[arg(long)]
    json: bool,

    /// Export the full topology report to a JSON file
    #[arg(long)]
    export: Option<String>,
}

impl Args {
    fn config(&self) -> ConstellationConfig {
        ConstellationConfig {
            seed: self.seed,
            planes: self.planes,
            satellites_per_plane: self.per_plane,
            altitude_m: self.altitude_km * 1000.0,
            inclination_deg: self.inclination,
            ground_stations: self.ground_stations,
            user_terminals: self.user_terminals,
        }
    }
}

fn run(args: &Args) -> Result<TopologyReport, SimError> {
    let constellation = Constellation::build(args.config())?;
    let report = constellation.report()?;

    if let Some(path) = &args.export {
        report.write_to_file(path)?;
        info!("Exported {} objects and {} links to {}", report.object_count(), report.link_count(), path);
    }

    Ok(report)
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if !args.json {
        info!("SatCom scenario builder v0.1.0");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            error!("✗ Scenario failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let summary = serde_json::json!({
            "seed": report.seed,
            "objects": report.objects_by_kind,
            "links": report.links_by_kind,
            "mean_isl_length_km": report.mean_isl_length_m.map(|m| m / 1000.0),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("✗ Could not serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for (kind, count) in &report.objects_by_kind {
            info!("  {:<16} {}", kind, count);
        }
        for (kind, count) in &report.links_by_kind {
            info!("  {:<20} {}", kind, count);
        }
        if let Some(mean) = report.mean_isl_length_m {
            info!("  Mean ISL length: {:.1} km", mean / 1000.0);
        }
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!("✅ {} objects, {} links", report.object_count(), report.link_count());
    }
}
