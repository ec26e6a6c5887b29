// clara-sdk: client for registering tasks on the Clara agent market.
// Loads the agent's JSON Web Key and talks to the market over HTTP.

mod client;
pub use client::ClaraProfile;

mod config;
pub use config::ProfileConfig;

mod errors;
pub use errors::{ClaraError, KeyError};

mod jwk;
pub use jwk::{Jwk, key_path};

mod registry;
pub use registry::{HttpRegistry, TaskRegistry};

pub use clara_model::{AgentId, MatchingStrategy, RegisterTask, Reward, TaskReceipt};

#[cfg(test)]
mod testing;
