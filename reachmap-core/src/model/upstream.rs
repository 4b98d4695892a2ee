//! Records as returned by the reachable-transit vendor API
//!
//! Items are kept as raw JSON until they are turned into [`RawNodeRecord`]s
//! one by one, so a single malformed item never fails the whole response.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Coordinate, Error, Minutes};

/// Body of a reachable-area response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamResponse {
    /// Item count reported by the vendor
    pub count: usize,
    pub items: Vec<Value>,
    /// Datum and coordinate unit metadata, passed through untouched
    pub unit: Value,
}

impl UpstreamResponse {
    pub fn from_records(records: &[RawNodeRecord]) -> Result<Self, Error> {
        let items = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            count: items.len(),
            items,
            unit: Value::Null,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read response '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Items that have the shape of a node record.
    ///
    /// Items that fail to deserialize are skipped.
    pub fn records(&self) -> impl Iterator<Item = RawNodeRecord> + '_ {
        self.items.iter().enumerate().filter_map(|(idx, item)| {
            RawNodeRecord::deserialize(item)
                .inspect_err(|e| debug!("Skipping upstream item {idx}: {e}"))
                .ok()
        })
    }
}

/// Single upstream node before validation and classification.
///
/// Only the coordinate decides whether a record is usable; `null` metadata
/// falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawNodeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `{"lat": .., "lon": ..}` or `[lat, lon]`, anything else is unusable
    pub coord: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub time: Minutes,
    #[serde(alias = "transfers", deserialize_with = "null_as_default")]
    pub transit_count: u32,
    pub lines: Option<Vec<String>>,
    /// Opaque vendor identifier, numbers are kept as their decimal text
    #[serde(deserialize_with = "opaque_id")]
    pub node_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id),
        Some(other) => Some(other.to_string()),
    })
}

impl RawNodeRecord {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        time: Minutes,
        transit_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            coord: Some(serde_json::json!({ "lat": latitude, "lon": longitude })),
            time,
            transit_count,
            lines: None,
            node_id: None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.coord.as_ref()? {
            Value::Object(map) => {
                Coordinate::new(map.get("lat")?.as_f64()?, map.get("lon")?.as_f64()?)
            }
            Value::Array(pair) if pair.len() == 2 => {
                Coordinate::new(pair[0].as_f64()?, pair[1].as_f64()?)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coordinate_accepts_object_and_pair() {
        let record: RawNodeRecord =
            serde_json::from_value(json!({"name": "A", "coord": {"lat": 35.0, "lon": 139.0}}))
                .unwrap();
        let coord = record.coordinate().unwrap();
        assert_eq!(coord.latitude(), 35.0);
        assert_eq!(coord.longitude(), 139.0);

        let record: RawNodeRecord =
            serde_json::from_value(json!({"name": "B", "coord": [35.5, 139.5]})).unwrap();
        assert_eq!(record.coordinate().unwrap().longitude(), 139.5);
    }

    #[test]
    fn coordinate_rejects_missing_or_malformed() {
        for coord in [
            json!(null),
            json!({"lat": 35.0}),
            json!({"lat": "35.0", "lon": 139.0}),
            json!([35.0]),
            json!("35.0,139.0"),
        ] {
            let record: RawNodeRecord =
                serde_json::from_value(json!({"name": "X", "coord": coord})).unwrap();
            assert!(record.coordinate().is_none(), "accepted {:?}", record.coord);
        }

        let record: RawNodeRecord = serde_json::from_value(json!({"name": "Y"})).unwrap();
        assert!(record.coordinate().is_none());
    }

    #[test]
    fn vendor_field_names_and_defaults() {
        let record: RawNodeRecord = serde_json::from_value(json!({
            "name": "Kayabacho",
            "coord": {"lat": 35.68, "lon": 139.77},
            "time": 7,
            "transit_count": 1,
            "node_id": "00001234"
        }))
        .unwrap();
        assert_eq!(record.time, 7);
        assert_eq!(record.transit_count, 1);
        assert_eq!(record.node_id.as_deref(), Some("00001234"));
        assert!(record.lines.is_none());

        let record: RawNodeRecord =
            serde_json::from_value(json!({"name": "Z", "transfers": 2})).unwrap();
        assert_eq!(record.transit_count, 2);
        assert_eq!(record.time, 0);
    }

    #[test]
    fn records_skips_items_with_wrong_shape() {
        let response = UpstreamResponse::from_json_str(
            r#"{
                "count": 3,
                "items": [
                    {"name": "Ok", "coord": {"lat": 35.0, "lon": 139.0}, "time": 3},
                    {"name": "Negative", "coord": {"lat": 35.0, "lon": 139.0}, "time": -4},
                    "not an object"
                ],
                "unit": {"datum": "wgs84", "coord_unit": "degree"}
            }"#,
        )
        .unwrap();

        let names: Vec<String> = response.records().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ok".to_string()]);
        assert_eq!(response.count, 3);
    }

    #[test]
    fn null_metadata_and_numeric_ids_keep_the_record() {
        let response = UpstreamResponse::from_json_str(
            r#"{
                "count": 3,
                "items": [
                    {"name": null, "coord": {"lat": 35.0, "lon": 139.0}, "time": 4},
                    {"name": "Numbered", "coord": {"lat": 35.0, "lon": 139.0}, "node_id": 6668},
                    {"name": "Untimed", "coord": {"lat": 35.0, "lon": 139.0}, "time": null, "transit_count": null}
                ]
            }"#,
        )
        .unwrap();

        let records: Vec<RawNodeRecord> = response.records().collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].time, 4);
        assert_eq!(records[1].node_id.as_deref(), Some("6668"));
        assert_eq!(records[2].time, 0);
        assert_eq!(records[2].transit_count, 0);
        assert!(records.iter().all(|r| r.coordinate().is_some()));
    }
}
