use serde::{Deserialize, Serialize};

use crate::{MatchingStrategy, Reward, Topic};

/// Task descriptor submitted to the market.
///
/// Nothing is validated locally: an empty topic or a zero reward is sent as is
/// and left to the market to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTask {
    /// Topic tag agents subscribe to.
    pub topic: Topic,
    /// Incentive for the assigned agent.
    pub reward: Reward,
    /// How the market selects the assignee.
    pub matching_strategy: MatchingStrategy,
    /// Opaque task content, delivered to the assignee verbatim.
    pub payload: String,
}

impl RegisterTask {
    pub fn new(topic: impl Into<Topic>, payload: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            reward: Reward::default(),
            matching_strategy: MatchingStrategy::default(),
            payload: payload.into(),
        }
    }

    pub fn with_reward(mut self, reward: impl Into<Reward>) -> Self {
        self.reward = reward.into();
        self
    }

    pub fn with_strategy(mut self, strategy: MatchingStrategy) -> Self {
        self.matching_strategy = strategy;
        self
    }
}
