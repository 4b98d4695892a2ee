//! Travel budget filtering and ordering of classified nodes

use serde::{Deserialize, Serialize};

use crate::{Minutes, Node};

/// Inclusive upper bounds, `None` leaves the dimension unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub max_travel_time: Option<Minutes>,
    pub max_transfers: Option<u32>,
}

impl FilterBounds {
    pub fn new(max_travel_time: Option<Minutes>, max_transfers: Option<u32>) -> Self {
        Self {
            max_travel_time,
            max_transfers,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn admits(&self, node: &Node) -> bool {
        self.max_travel_time.is_none_or(|t| node.travel_time <= t)
            && self.max_transfers.is_none_or(|k| node.transfer_count <= k)
    }
}

/// Nodes within `bounds`, by ascending travel time.
///
/// Equal travel times keep their input order.
pub fn filter_nodes(nodes: &[Node], bounds: &FilterBounds) -> Vec<Node> {
    let mut kept: Vec<Node> = nodes
        .iter()
        .filter(|node| bounds.admits(node))
        .cloned()
        .collect();
    // stable
    kept.sort_by_key(|node| node.travel_time);
    kept
}

/// Splits nodes into `(stations, bus_stops)` without reordering either side
pub fn split_by_category(nodes: Vec<Node>) -> (Vec<Node>, Vec<Node>) {
    nodes
        .into_iter()
        .partition(|node| !node.is_bus_stop())
}
