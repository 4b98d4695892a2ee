//! Hand-off formats for the collaborators downstream of the core:
//! a flat CSV table and a GeoJSON document for map rendering.

pub mod csv;
pub mod geojson;

pub use self::csv::{load_nodes_csv, read_nodes, save_nodes_csv, write_nodes};
pub use self::geojson::{map_feature_collection, map_geojson_string};
