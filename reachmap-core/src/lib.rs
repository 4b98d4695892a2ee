//! Core transform behind reachable-area queries: classify the transit nodes
//! returned for an origin, filter them by travel budget, and trace the
//! outline of the area they cover.

pub mod area;
pub mod boundary;
pub mod bucket;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod mock;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use model::{Coordinate, Node, NodeCategory, RawNodeRecord, UpstreamResponse};

/// Travel time in whole minutes
pub type Minutes = u32;
