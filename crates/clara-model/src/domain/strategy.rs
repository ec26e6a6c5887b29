use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Policy the market uses to pick the agent(s) a task is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchingStrategy {
    /// Offer the task to every agent subscribed to the topic.
    Broadcast,
    /// Assign to the subscribed agent with the fewest tasks in progress.
    #[default]
    LeastOccupied,
    /// Assign to the subscribed agent asking for the lowest fee.
    Cheapest,
}

impl MatchingStrategy {
    /// Returns the wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingStrategy::Broadcast => "broadcast",
            MatchingStrategy::LeastOccupied => "leastOccupied",
            MatchingStrategy::Cheapest => "cheapest",
        }
    }
}

impl FromStr for MatchingStrategy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "broadcast" => Ok(MatchingStrategy::Broadcast),
            "leastOccupied" => Ok(MatchingStrategy::LeastOccupied),
            "cheapest" => Ok(MatchingStrategy::Cheapest),
            _ => Err(ModelError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
