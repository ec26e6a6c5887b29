mod agent_id;
pub use agent_id::AgentId;

mod strategy;
pub use strategy::MatchingStrategy;

mod reward;
pub use reward::Reward;

mod register_task;
pub use register_task::RegisterTask;

mod receipt;
pub use receipt::TaskReceipt;

/// Free-form tag routing a task to agents subscribed to it (e.g. `"tweet"`).
pub type Topic = String;
