use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Minutes;

/// Kind of transit node
///
/// Upstream data rarely carries an authoritative type, so the category
/// is derived from the node name by a [`crate::classify::NodeClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Station,
    BusStop,
}

impl NodeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::Station => "station",
            NodeCategory::BusStop => "bus_stop",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGS84 position in degrees
///
/// Only finite values inside the latitude/longitude ranges are accepted,
/// so a `Coordinate` always describes a real place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Planar point with `x = longitude` and `y = latitude`
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Station or bus stop reached from the query origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub coordinate: Coordinate,
    /// Minutes from the origin
    pub travel_time: Minutes,
    pub transfer_count: u32,
    /// Line names serving the node, empty when the source does not report them
    pub lines: Vec<String>,
    pub node_id: String,
    pub category: NodeCategory,
}

impl Node {
    pub fn new(name: impl Into<String>, coordinate: Coordinate, category: NodeCategory) -> Self {
        Self {
            name: name.into(),
            coordinate,
            travel_time: 0,
            transfer_count: 0,
            lines: Vec::new(),
            node_id: String::new(),
            category,
        }
    }

    #[must_use]
    pub fn with_travel(mut self, travel_time: Minutes, transfer_count: u32) -> Self {
        self.travel_time = travel_time;
        self.transfer_count = transfer_count;
        self
    }

    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }

    pub fn point(&self) -> Point<f64> {
        self.coordinate.to_point()
    }

    pub fn is_bus_stop(&self) -> bool {
        self.category == NodeCategory::BusStop
    }
}
