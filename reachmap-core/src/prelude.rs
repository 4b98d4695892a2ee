pub use crate::Minutes;

// Re-export key components
pub use crate::area::{AreaSummary, ReachableArea, assemble_area};
pub use crate::boundary::{Boundary, BoundaryMethod, build_boundary, synthetic_boundary};
pub use crate::bucket::{DurationBuckets, Tier};
pub use crate::classify::{KeywordClassifier, NodeClassifier, classify_record, classify_records};
pub use crate::config::ReachConfig;
pub use crate::filter::{FilterBounds, filter_nodes, split_by_category};
pub use crate::mock::{mock_area, mock_nodes};
pub use crate::model::{Coordinate, Node, NodeCategory, RawNodeRecord, UpstreamResponse};

pub use crate::Error;
