//! Turning raw upstream records into typed [`Node`]s
//!
//! The vendor does not say whether a node is a station or a bus stop, so the
//! category is guessed from the name. The guess is a [`NodeClassifier`]
//! strategy; [`KeywordClassifier`] covers the common case of marker words.
//! Names without any marker are treated as stations, which misfiles unknown
//! node types. That is a limit of the data, not something to guess around.

use log::debug;

use crate::{Node, NodeCategory, RawNodeRecord};

/// Decides the category of a node from its name
pub trait NodeClassifier: Send + Sync {
    fn classify(&self, name: &str) -> NodeCategory;
}

impl<F> NodeClassifier for F
where
    F: Fn(&str) -> NodeCategory + Send + Sync,
{
    fn classify(&self, name: &str) -> NodeCategory {
        self(name)
    }
}

/// Bus stop when the name contains any keyword, ignoring case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub const DEFAULT_KEYWORDS: [&'static str; 2] = ["bus", "バス"];

    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEYWORDS)
    }
}

impl NodeClassifier for KeywordClassifier {
    fn classify(&self, name: &str) -> NodeCategory {
        let name = name.to_lowercase();
        if self.keywords.iter().any(|k| name.contains(k.as_str())) {
            NodeCategory::BusStop
        } else {
            NodeCategory::Station
        }
    }
}

/// Builds a node from a raw record, or `None` when it has no usable coordinate
pub fn classify_record<C>(record: &RawNodeRecord, classifier: &C) -> Option<Node>
where
    C: NodeClassifier + ?Sized,
{
    let Some(coordinate) = record.coordinate() else {
        debug!("Rejecting node '{}': missing or invalid coordinate", record.name);
        return None;
    };

    Some(Node {
        name: record.name.clone(),
        coordinate,
        travel_time: record.time,
        transfer_count: record.transit_count,
        lines: record.lines.clone().unwrap_or_default(),
        node_id: record.node_id.clone().unwrap_or_default(),
        category: classifier.classify(&record.name),
    })
}

/// Classifies every record, dropping the ones without a coordinate.
/// Input order is preserved.
pub fn classify_records<'a, I, C>(records: I, classifier: &C) -> Vec<Node>
where
    I: IntoIterator<Item = &'a RawNodeRecord>,
    C: NodeClassifier + ?Sized,
{
    records
        .into_iter()
        .filter_map(|record| classify_record(record, classifier))
        .collect()
}
