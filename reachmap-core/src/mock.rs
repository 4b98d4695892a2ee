//! Sample data around Kayabacho, Tokyo, for running without an upstream
//! response. The outline is synthetic since the sample is too small to
//! outline meaningfully.

use log::info;

use crate::area::ReachableArea;
use crate::boundary::synthetic_boundary;
use crate::filter::{FilterBounds, filter_nodes};
use crate::{Coordinate, Minutes, Node, NodeCategory};

struct MockNode {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    category: NodeCategory,
    lines: &'static [&'static str],
    travel_time: Minutes,
    transfers: u32,
}

const MOCK_NODES: [MockNode; 7] = [
    MockNode {
        name: "日本橋駅",
        latitude: 35.6827,
        longitude: 139.7745,
        category: NodeCategory::Station,
        lines: &["東京メトロ銀座線", "東京メトロ東西線", "都営浅草線"],
        travel_time: 5,
        transfers: 0,
    },
    MockNode {
        name: "八丁堀駅",
        latitude: 35.6748,
        longitude: 139.7767,
        category: NodeCategory::Station,
        lines: &["JR京葉線", "東京メトロ日比谷線"],
        travel_time: 8,
        transfers: 0,
    },
    MockNode {
        name: "門前仲町駅",
        latitude: 35.6719,
        longitude: 139.7955,
        category: NodeCategory::Station,
        lines: &["東京メトロ東西線", "都営大江戸線"],
        travel_time: 10,
        transfers: 0,
    },
    MockNode {
        name: "東京駅",
        latitude: 35.6812,
        longitude: 139.7671,
        category: NodeCategory::Station,
        lines: &["JR各線", "東京メトロ丸ノ内線"],
        travel_time: 15,
        transfers: 1,
    },
    MockNode {
        name: "銀座駅",
        latitude: 35.6715,
        longitude: 139.7650,
        category: NodeCategory::Station,
        lines: &["東京メトロ銀座線", "東京メトロ丸ノ内線", "東京メトロ日比谷線"],
        travel_time: 12,
        transfers: 1,
    },
    MockNode {
        name: "茅場町バス停",
        latitude: 35.6815,
        longitude: 139.7780,
        category: NodeCategory::BusStop,
        lines: &["都営バス 東22"],
        travel_time: 2,
        transfers: 0,
    },
    MockNode {
        name: "兜町バス停",
        latitude: 35.6799,
        longitude: 139.7785,
        category: NodeCategory::BusStop,
        lines: &["都営バス 東22", "都営バス 錦11"],
        travel_time: 5,
        transfers: 0,
    },
];

/// Every sample node, stations first, in a fixed order
pub fn mock_nodes() -> Vec<Node> {
    MOCK_NODES
        .iter()
        .filter_map(|m| {
            let coordinate = Coordinate::new(m.latitude, m.longitude)?;
            Some(
                Node::new(m.name, coordinate, m.category)
                    .with_travel(m.travel_time, m.transfers)
                    .with_lines(m.lines.iter().copied()),
            )
        })
        .collect()
}

/// Sample nodes within the budget and a walking-radius circle around `origin`
pub fn mock_area(
    origin: Coordinate,
    time_limit: Minutes,
    max_transfers: Option<u32>,
) -> ReachableArea {
    let bounds = FilterBounds::new(Some(time_limit), max_transfers);
    let nodes = filter_nodes(&mock_nodes(), &bounds);
    info!("Using {} mock nodes", nodes.len());

    ReachableArea {
        origin: Some(origin),
        nodes,
        boundary: synthetic_boundary(origin, time_limit),
        rejected: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryMethod, SYNTHETIC_VERTEX_COUNT};
    use crate::classify::{KeywordClassifier, NodeClassifier};

    fn origin() -> Coordinate {
        Coordinate::new(35.681_713_7, 139.777_779_7).unwrap()
    }

    #[test]
    fn sample_categories_agree_with_name_classifier() {
        let classifier = KeywordClassifier::default();
        for node in mock_nodes() {
            assert_eq!(classifier.classify(&node.name), node.category, "{}", node.name);
        }
    }

    #[test]
    fn mock_area_filters_by_budget() {
        let area = mock_area(origin(), 8, Some(0));
        let names: Vec<&str> = area.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["茅場町バス停", "日本橋駅", "兜町バス停", "八丁堀駅"]);

        let area = mock_area(origin(), 30, None);
        assert_eq!(area.nodes.len(), 7);
        assert_eq!(area.boundary.method(), BoundaryMethod::Synthetic);
        assert_eq!(area.boundary.len(), SYNTHETIC_VERTEX_COUNT + 1);
    }

    #[test]
    fn sample_lines_are_kept() {
        let nodes = mock_nodes();
        assert_eq!(nodes[0].lines.len(), 3);
        assert!(nodes.iter().all(|n| !n.lines.is_empty()));
    }
}
