use clara_model::AgentId;

use crate::errors::ClaraError;

const DEFAULT_ENDPOINT: &str = "http://localhost:8090";
const DEFAULT_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Agent the profile acts as.
    pub id: AgentId,
    /// Base URL of the market API.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

impl ProfileConfig {
    pub fn new(id: impl Into<AgentId>) -> Self {
        Self {
            id: id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ClaraError> {
        if self.id.is_empty() {
            return Err(ClaraError::InvalidConfig("agent id is empty".to_string()));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ClaraError::InvalidConfig(format!(
                "endpoint must be an http(s) url: {}",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ClaraError::InvalidConfig("timeout_ms must be > 0".to_string()));
        }
        Ok(())
    }
}
