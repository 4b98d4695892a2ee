use std::path::PathBuf;

use clap::Parser;
use reachmap_core::Minutes;
use reachmap_core::config::ReachConfig;

/// Find the stations and bus stops reachable from an origin within a travel
/// budget, write them as CSV tables and draw the reachable area as GeoJSON.
#[derive(Parser, Debug)]
#[command(name = "reachmap", version, about)]
pub struct Args {
    /// TOML settings file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Origin latitude (default: Kayabacho station)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Origin longitude (default: Kayabacho station)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Travel time budget in minutes (default: 30)
    #[arg(long)]
    pub time: Option<Minutes>,

    /// Maximum number of transfers (default: 1)
    #[arg(long)]
    pub transfers: Option<u32>,

    /// Saved reachable-area response (JSON). Mock data is used without it.
    #[arg(long)]
    pub response: Option<PathBuf>,

    /// Directory for stations.csv and bus_stops.csv (default: csv/)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// GeoJSON map output (default: reachable_map.geojson)
    #[arg(long)]
    pub map_file: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn apply(&self, config: &mut ReachConfig) {
        if let Some(lat) = self.lat {
            config.query.latitude = lat;
        }
        if let Some(lon) = self.lon {
            config.query.longitude = lon;
        }
        if let Some(time) = self.time {
            config.query.time_limit = time;
        }
        if let Some(transfers) = self.transfers {
            config.query.max_transfers = transfers;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir.clone_from(dir);
        }
        if let Some(map_file) = &self.map_file {
            config.output.map_file.clone_from(map_file);
        }
    }
}
