use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown matching strategy: {0} (expected: broadcast|leastOccupied|cheapest)")]
    UnknownStrategy(String),
}
