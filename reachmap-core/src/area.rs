//! Reachable area for one upstream response: classified and filtered nodes
//! together with the outline of the area they span.

use std::collections::BTreeMap;

use geo::Point;
use log::{info, warn};
use serde::Serialize;

use crate::boundary::{Boundary, build_boundary};
use crate::classify::{NodeClassifier, classify_records};
use crate::filter::{FilterBounds, filter_nodes, split_by_category};
use crate::{Coordinate, Minutes, Node, NodeCategory, RawNodeRecord, UpstreamResponse};

#[derive(Debug, Clone)]
pub struct ReachableArea {
    pub origin: Option<Coordinate>,
    /// Nodes within the bounds, by ascending travel time
    pub nodes: Vec<Node>,
    pub boundary: Boundary,
    /// Upstream items that could not be turned into nodes
    pub rejected: usize,
}

/// Classifies every record of `response`, outlines all accepted nodes and
/// keeps the ones within `bounds`.
///
/// The outline covers every node the upstream reported as reachable, not
/// only those left after filtering.
pub fn assemble_area<C>(
    response: &UpstreamResponse,
    classifier: &C,
    bounds: &FilterBounds,
    origin: Option<Coordinate>,
) -> ReachableArea
where
    C: NodeClassifier + ?Sized,
{
    let records: Vec<RawNodeRecord> = response.records().collect();
    let accepted = classify_records(&records, classifier);
    let rejected = response.items.len() - accepted.len();

    if response.count != response.items.len() {
        warn!(
            "Upstream reported {} items but sent {}",
            response.count,
            response.items.len()
        );
    }

    let points: Vec<Point<f64>> = accepted.iter().map(Node::point).collect();
    let boundary = build_boundary(&points);
    let nodes = filter_nodes(&accepted, bounds);

    info!(
        "Accepted {} of {} upstream items, {} within bounds, boundary of {} points",
        accepted.len(),
        response.items.len(),
        nodes.len(),
        boundary.len()
    );

    ReachableArea {
        origin,
        nodes,
        boundary,
        rejected,
    }
}

impl ReachableArea {
    pub fn stations(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|n| !n.is_bus_stop())
    }

    pub fn bus_stops(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|n| n.is_bus_stop())
    }

    /// `(stations, bus_stops)`, each still ordered by travel time
    pub fn split(&self) -> (Vec<Node>, Vec<Node>) {
        split_by_category(self.nodes.clone())
    }

    pub fn summary(&self) -> AreaSummary {
        AreaSummary::from_nodes(&self.nodes)
    }
}

/// Counts and travel time statistics for a set of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AreaSummary {
    pub stations: usize,
    pub bus_stops: usize,
    pub min_travel_time: Option<Minutes>,
    pub max_travel_time: Option<Minutes>,
    /// Number of nodes per transfer count
    pub by_transfers: BTreeMap<u32, usize>,
}

impl AreaSummary {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut summary = Self::default();
        for node in nodes {
            match node.category {
                NodeCategory::Station => summary.stations += 1,
                NodeCategory::BusStop => summary.bus_stops += 1,
            }
            *summary.by_transfers.entry(node.transfer_count).or_default() += 1;
        }
        summary.min_travel_time = nodes.iter().map(|n| n.travel_time).min();
        summary.max_travel_time = nodes.iter().map(|n| n.travel_time).max();
        summary
    }

    pub fn total(&self) -> usize {
        self.stations + self.bus_stops
    }
}
