use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use clara_model::{AgentId, RegisterTask, TaskReceipt};
use serde::Serialize;
use tracing::trace;

use crate::{config::ProfileConfig, errors::ClaraError, jwk::Jwk, registry::TaskRegistry};

const TASKS_PATH: &str = "/v1/tasks";

/// Market API over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterTaskRequest<'a> {
    agent_id: &'a AgentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<&'a str>,
    #[serde(flatten)]
    task: &'a RegisterTask,
    ts: u64,
}

impl HttpRegistry {
    pub fn new(cfg: &ProfileConfig) -> Result<Self, ClaraError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TaskRegistry for HttpRegistry {
    async fn register_task(
        &self,
        agent: &AgentId,
        jwk: &Jwk,
        task: &RegisterTask,
    ) -> Result<TaskReceipt, ClaraError> {
        let request = RegisterTaskRequest {
            agent_id: agent,
            owner: jwk.modulus(),
            task,
            ts: unix_now(),
        };

        let response = self
            .client
            .post(format!("{}{}", self.endpoint, TASKS_PATH))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(status = status.as_u16(), body = %body, "market response");

        if !status.is_success() {
            return Err(ClaraError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<serde_json::Value>(&body)
            .map(TaskReceipt::from)
            .map_err(|e| {
                ClaraError::InvalidResponse(format!(
                    "failed to parse response: {}, body: {}",
                    e, body
                ))
            })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
