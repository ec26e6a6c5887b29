use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use clara_model::AgentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::KeyError;

/// JSON Web Key (RFC 7517) of an agent.
///
/// Only `kty` is required. All other members are kept as they appear in the document.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(flatten)]
    params: Map<String, Value>,
}

impl Jwk {
    /// Read and parse a key document with a single blocking read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KeyError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| KeyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| KeyError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get a member other than `kty`.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Public modulus `n` of an RSA key.
    pub fn modulus(&self) -> Option<&str> {
        self.params.get("n").and_then(Value::as_str)
    }

    /// `true` if the key carries the private exponent `d`.
    pub fn is_private(&self) -> bool {
        self.params.contains_key("d")
    }
}

impl FromStr for Jwk {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

// Key parameters are secret material; print member names only.
impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("members", &self.params.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Location of the key file for `id` inside `dir`: `<dir>/<id>.json`.
pub fn key_path(dir: impl AsRef<Path>, id: &AgentId) -> PathBuf {
    dir.as_ref().join(format!("{}.json", id.as_str()))
}
