mod http;
pub use http::HttpRegistry;

use async_trait::async_trait;
use clara_model::{AgentId, RegisterTask, TaskReceipt};

use crate::{errors::ClaraError, jwk::Jwk};

/// Transport that delivers a task registration to the market.
///
/// [`HttpRegistry`] is the default; custom implementations can route the
/// request elsewhere (another transport, a local queue, a test double).
#[async_trait]
pub trait TaskRegistry: Send + Sync {
    /// Submit `task` on behalf of `agent` and return the market's answer unmodified.
    async fn register_task(
        &self,
        agent: &AgentId,
        jwk: &Jwk,
        task: &RegisterTask,
    ) -> Result<TaskReceipt, ClaraError>;
}
