//! Channel categories accepted by the idea generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of YouTube channel an idea batch is generated for.
///
/// Serialized in kebab-case (`tech-review`, `health-fitness`), matching the
/// values the dashboard form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelType {
    Educational,
    Entertainment,
    TechReview,
    Tutorial,
    Lifestyle,
    Gaming,
    Business,
    HealthFitness,
    Travel,
    Food,
}

impl ChannelType {
    pub const ALL: [ChannelType; 10] = [
        ChannelType::Educational,
        ChannelType::Entertainment,
        ChannelType::TechReview,
        ChannelType::Tutorial,
        ChannelType::Lifestyle,
        ChannelType::Gaming,
        ChannelType::Business,
        ChannelType::HealthFitness,
        ChannelType::Travel,
        ChannelType::Food,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelType::Educational => "educational",
            ChannelType::Entertainment => "entertainment",
            ChannelType::TechReview => "tech-review",
            ChannelType::Tutorial => "tutorial",
            ChannelType::Lifestyle => "lifestyle",
            ChannelType::Gaming => "gaming",
            ChannelType::Business => "business",
            ChannelType::HealthFitness => "health-fitness",
            ChannelType::Travel => "travel",
            ChannelType::Food => "food",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown channel type: {s}")))
    }
}
