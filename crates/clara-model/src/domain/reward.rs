use std::fmt;

use serde::{Deserialize, Serialize};

/// Incentive paid to the agent that completes a task, in base units of the market token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reward(pub u64);

impl Reward {
    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Reward {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
