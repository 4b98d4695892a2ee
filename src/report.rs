use std::path::Path;

use reachmap_core::area::{AreaSummary, ReachableArea};
use reachmap_core::config::QueryConfig;

pub fn print_query(query: &QueryConfig) {
    println!("Query:");
    println!("  origin: ({}, {})", query.latitude, query.longitude);
    println!("  within: {} min", query.time_limit);
    println!("  max transfers: {}", query.max_transfers);
    println!();
}

pub fn print_outputs(area: &ReachableArea, stations_csv: &Path, bus_stops_csv: &Path, map: &Path) {
    let summary = area.summary();
    println!("Wrote:");
    println!("  {} ({} stations)", stations_csv.display(), summary.stations);
    println!("  {} ({} bus stops)", bus_stops_csv.display(), summary.bus_stops);
    println!(
        "  {} (outline: {} points, {:?})",
        map.display(),
        area.boundary.len(),
        area.boundary.method()
    );
    if area.rejected > 0 {
        println!("  skipped {} upstream items without coordinates", area.rejected);
    }
    println!();
}

pub fn print_summary(summary: &AreaSummary) {
    let minutes = |m: Option<u32>| m.map_or_else(|| "n/a".to_string(), |m| format!("{m} min"));

    println!("Summary:");
    println!("  fastest: {}", minutes(summary.min_travel_time));
    println!("  slowest: {}", minutes(summary.max_travel_time));
    for (transfers, count) in &summary.by_transfers {
        println!("  {transfers} transfer(s): {count}");
    }
}
