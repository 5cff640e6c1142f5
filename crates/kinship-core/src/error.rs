use thiserror::Error;

/// Errors raised while loading a family snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
