mod args;
mod report;

use std::process::ExitCode;

use clap::Parser;
use reachmap_core::export::{map_geojson_string, save_nodes_csv};
use reachmap_core::prelude::*;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => ReachConfig::load(path)?,
        None => ReachConfig::default(),
    };
    args.apply(&mut config);

    // fail on bad tiers before doing any work
    let buckets = config.duration_buckets()?;
    let origin = config.query.origin()?;
    let bounds = config.query.bounds();

    if !args.json {
        report::print_query(&config.query);
    }

    let area = match &args.response {
        Some(path) => {
            info!("Reading upstream response {}", path.display());
            let response = UpstreamResponse::load(path)?;
            assemble_area(&response, &config.classifier(), &bounds, Some(origin))
        }
        None => {
            info!("No upstream response given, using mock data");
            mock_area(origin, config.query.time_limit, Some(config.query.max_transfers))
        }
    };
    if let Some(wkt) = area.boundary.to_wkt_string() {
        debug!("Reachable area: {wkt}");
    }

    let output_dir = &config.output.dir;
    std::fs::create_dir_all(output_dir)?;
    let stations_csv = output_dir.join("stations.csv");
    let bus_stops_csv = output_dir.join("bus_stops.csv");

    let (stations, bus_stops) = area.split();
    save_nodes_csv(&stations_csv, &stations)?;
    save_nodes_csv(&bus_stops_csv, &bus_stops)?;

    let geojson = map_geojson_string(&area.nodes, &area.boundary, &buckets, area.origin)?;
    std::fs::write(&config.output.map_file, geojson)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&area.summary())?);
    } else {
        report::print_outputs(&area, &stations_csv, &bus_stops_csv, &config.output.map_file);
        report::print_summary(&area.summary());
    }
    Ok(())
}
