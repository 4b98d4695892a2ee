use reachmap_core::bucket::DurationBuckets;
use reachmap_core::classify::KeywordClassifier;
use reachmap_core::config::{QueryConfig, ReachConfig};
use reachmap_core::Error;

/// Read-only state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub classifier: KeywordClassifier,
    pub buckets: DurationBuckets,
    /// Fallbacks for query parameters a request leaves out
    pub defaults: QueryConfig,
}

impl AppState {
    /// # Errors
    ///
    /// Fails when the configured duration tiers are invalid.
    pub fn from_config(config: &ReachConfig) -> Result<Self, Error> {
        Ok(Self {
            classifier: config.classifier(),
            buckets: config.duration_buckets()?,
            defaults: config.query.clone(),
        })
    }
}
