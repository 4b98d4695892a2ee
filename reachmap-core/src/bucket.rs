//! Travel time tiers for presentation
//!
//! A [`DurationBuckets`] is a list of inclusive upper bounds in strictly
//! increasing order, each with a tier, plus an overflow tier for anything
//! above the last bound. Lookups take the first bound the duration does not
//! exceed, so a duration equal to a bound lands in the tighter tier.

use serde::{Deserialize, Serialize};

use crate::{Error, Minutes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub label: String,
    /// Hex color such as `#2ECC40`
    pub color: String,
}

impl Tier {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBuckets {
    thresholds: Vec<(Minutes, Tier)>,
    overflow: Tier,
}

impl DurationBuckets {
    /// # Errors
    ///
    /// Returns [`Error::InvalidBuckets`] if `thresholds` is empty or its
    /// bounds are not strictly increasing.
    pub fn new(thresholds: Vec<(Minutes, Tier)>, overflow: Tier) -> Result<Self, Error> {
        if thresholds.is_empty() {
            return Err(Error::InvalidBuckets(
                "at least one threshold is required".to_string(),
            ));
        }

        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
            return Err(Error::InvalidBuckets(format!(
                "thresholds must be strictly increasing, got {} before {}",
                pair[0].0, pair[1].0
            )));
        }

        Ok(Self {
            thresholds,
            overflow,
        })
    }

    pub fn tier_for(&self, minutes: Minutes) -> &Tier {
        self.thresholds
            .iter()
            .find(|(bound, _)| minutes <= *bound)
            .map_or(&self.overflow, |(_, tier)| tier)
    }

    pub fn label_for(&self, minutes: Minutes) -> &str {
        &self.tier_for(minutes).label
    }

    pub fn color_for(&self, minutes: Minutes) -> &str {
        &self.tier_for(minutes).color
    }

    pub fn thresholds(&self) -> &[(Minutes, Tier)] {
        &self.thresholds
    }

    pub fn overflow(&self) -> &Tier {
        &self.overflow
    }
}

impl Default for DurationBuckets {
    fn default() -> Self {
        Self {
            thresholds: vec![
                (10, Tier::new("green", "#2ECC40")),
                (20, Tier::new("yellow", "#FFDC00")),
                (30, Tier::new("orange", "#FF851B")),
            ],
            overflow: Tier::new("red", "#FF4136"),
        }
    }
}
