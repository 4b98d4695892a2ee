use ::geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::{Value, json};

use crate::boundary::Boundary;
use crate::bucket::DurationBuckets;
use crate::{Coordinate, Error, Node};

/// Map layers as one `FeatureCollection`.
///
/// Holds the origin marker (if any), one marker per node tagged with its
/// duration tier, and the area outline unless it is empty.
pub fn map_feature_collection(
    nodes: &[Node],
    boundary: &Boundary,
    buckets: &DurationBuckets,
    origin: Option<Coordinate>,
) -> Result<FeatureCollection, Error> {
    let mut features = Vec::with_capacity(nodes.len() + 2);

    if let Some(origin) = origin {
        features.push(origin_feature(origin)?);
    }

    for node in nodes {
        features.push(node_feature(node, buckets)?);
    }

    if !boundary.is_empty() {
        features.push(area_feature(boundary)?);
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

pub fn map_geojson_string(
    nodes: &[Node],
    boundary: &Boundary,
    buckets: &DurationBuckets,
    origin: Option<Coordinate>,
) -> Result<String, Error> {
    let collection = map_feature_collection(nodes, boundary, buckets, origin)?;
    serde_json::to_string(&collection).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn origin_feature(origin: Coordinate) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&origin.to_point()));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "origin",
        }
    });

    to_feature(value)
}

fn node_feature(node: &Node, buckets: &DurationBuckets) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeometryValue::from(&node.point()));
    let tier = buckets.tier_for(node.travel_time);

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "node",
            "name": node.name,
            "category": node.category,
            "travel_time": node.travel_time,
            "transfer_count": node.transfer_count,
            "lines": node.lines,
            "tier": tier.label,
            "color": tier.color,
        }
    });

    to_feature(value)
}

fn area_feature(boundary: &Boundary) -> Result<Feature, Error> {
    let value = json!({
        "type": "Feature",
        "geometry": boundary.to_geojson_geometry(),
        "properties": {
            "kind": "reachable_area",
            "method": boundary.method(),
        }
    });

    to_feature(value)
}

fn to_feature(value: Value) -> Result<Feature, Error> {
    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
