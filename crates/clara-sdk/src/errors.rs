use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("failed to read key file {file}: {source}", file = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key file {file} is not a valid JWK: {source}", file = .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed JWK: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClaraError {
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("invalid profile config: {0}")]
    InvalidConfig(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("market rejected task (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
