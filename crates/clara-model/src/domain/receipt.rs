use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a task registration, exactly as the market returned it.
///
/// The SDK never inspects or reshapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskReceipt(Value);

impl TaskReceipt {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for TaskReceipt {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Renders the whole value as indented JSON, nested structures included.
impl fmt::Display for TaskReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
