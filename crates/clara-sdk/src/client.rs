use std::path::Path;

use clara_model::{AgentId, RegisterTask, TaskReceipt};
use tracing::{debug, info, warn};

use crate::{
    config::ProfileConfig,
    errors::ClaraError,
    jwk::{Jwk, key_path},
    registry::{HttpRegistry, TaskRegistry},
};

/// An agent's handle on the market.
///
/// Owns the agent's key for its whole lifetime.
pub struct ClaraProfile<R = HttpRegistry> {
    id: AgentId,
    jwk: Jwk,
    registry: R,
}

impl ClaraProfile<HttpRegistry> {
    /// Build a profile talking to the market over HTTP.
    pub fn new(config: ProfileConfig, jwk: Jwk) -> Result<Self, ClaraError> {
        config.validate()?;
        let registry = HttpRegistry::new(&config)?;
        debug!(agent = %config.id, endpoint = registry.endpoint(), "profile created");

        Ok(Self {
            id: config.id,
            jwk,
            registry,
        })
    }

    /// Load `<dir>/<id>.json` and build the profile from it.
    ///
    /// Key errors are returned before anything touches the network.
    pub fn from_key_dir(config: ProfileConfig, dir: impl AsRef<Path>) -> Result<Self, ClaraError> {
        let path = key_path(dir, &config.id);
        let jwk = Jwk::from_file(&path)?;
        debug!(agent = %config.id, path = %path.display(), "key loaded");

        Self::new(config, jwk)
    }
}

impl<R> ClaraProfile<R>
where
    R: TaskRegistry,
{
    pub fn with_registry(id: impl Into<AgentId>, jwk: Jwk, registry: R) -> Self {
        Self {
            id: id.into(),
            jwk,
            registry,
        }
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn jwk(&self) -> &Jwk {
        &self.jwk
    }

    /// Register a task on the market.
    ///
    /// One request, no retries. The receipt is whatever the market answered.
    pub async fn register_task(&self, task: &RegisterTask) -> Result<TaskReceipt, ClaraError> {
        debug!(
            agent = %self.id,
            topic = %task.topic,
            reward = task.reward.amount(),
            strategy = %task.matching_strategy,
            "registering task"
        );

        match self.registry.register_task(&self.id, &self.jwk, task).await {
            Ok(receipt) => {
                info!(
                    agent = %self.id,
                    topic = %task.topic,
                    reward = task.reward.amount(),
                    strategy = %task.matching_strategy,
                    "task registered"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(agent = %self.id, topic = %task.topic, "task registration failed: {}", e);
                Err(e)
            }
        }
    }
}
