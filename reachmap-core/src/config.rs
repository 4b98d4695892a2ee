//! Settings shared by the command line tool and the server
//!
//! Every field has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! [query]
//! time_limit = 45
//!
//! [classifier]
//! bus_keywords = ["bus", "バス", "停留所"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bucket::{DurationBuckets, Tier};
use crate::classify::KeywordClassifier;
use crate::filter::FilterBounds;
use crate::{Coordinate, Error, Minutes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
    pub query: QueryConfig,
    pub output: OutputConfig,
    pub classifier: ClassifierConfig,
    pub buckets: BucketConfig,
    pub server: ServerConfig,
}

impl ReachConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(|e| Error::ConfigError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        toml::from_str(&text)
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))
    }

    /// # Errors
    ///
    /// Fails when the configured tiers are empty or out of order.
    pub fn duration_buckets(&self) -> Result<DurationBuckets, Error> {
        self.buckets.build()
    }

    pub fn classifier(&self) -> KeywordClassifier {
        KeywordClassifier::new(&self.classifier.bus_keywords)
    }
}

/// Origin and travel budget of a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub time_limit: Minutes,
    pub max_transfers: u32,
}

impl QueryConfig {
    pub fn origin(&self) -> Result<Coordinate, Error> {
        Coordinate::new(self.latitude, self.longitude).ok_or_else(|| {
            Error::InvalidData(format!(
                "Origin ({}, {}) is not a valid WGS84 coordinate",
                self.latitude, self.longitude
            ))
        })
    }

    pub fn bounds(&self) -> FilterBounds {
        FilterBounds::new(Some(self.time_limit), Some(self.max_transfers))
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        // Kayabacho station, Tokyo
        Self {
            latitude: 35.681_713_7,
            longitude: 139.777_779_7,
            time_limit: 30,
            max_transfers: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub map_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("csv"),
            map_file: PathBuf::from("reachable_map.geojson"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub bus_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            bus_keywords: KeywordClassifier::DEFAULT_KEYWORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub max_minutes: Minutes,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    pub thresholds: Vec<ThresholdConfig>,
    pub overflow_label: String,
    pub overflow_color: String,
}

impl BucketConfig {
    pub fn build(&self) -> Result<DurationBuckets, Error> {
        DurationBuckets::new(
            self.thresholds
                .iter()
                .map(|t| (t.max_minutes, Tier::new(&t.label, &t.color)))
                .collect(),
            Tier::new(&self.overflow_label, &self.overflow_color),
        )
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        let buckets = DurationBuckets::default();
        Self {
            thresholds: buckets
                .thresholds()
                .iter()
                .map(|(max_minutes, tier)| ThresholdConfig {
                    max_minutes: *max_minutes,
                    label: tier.label.clone(),
                    color: tier.color.clone(),
                })
                .collect(),
            overflow_label: buckets.overflow().label.clone(),
            overflow_color: buckets.overflow().color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
            concurrency_limit: 64,
        }
    }
}
