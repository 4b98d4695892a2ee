//! Data model for reachable transit nodes
//!
//! `node` holds the validated types the rest of the crate works with,
//! `upstream` the loosely typed records as the vendor API returns them.

pub mod node;
pub mod upstream;

pub use node::{Coordinate, Node, NodeCategory};
pub use upstream::{RawNodeRecord, UpstreamResponse};
