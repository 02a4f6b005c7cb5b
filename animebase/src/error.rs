use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
    #[error("invalid RON dataset: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid JSON dataset: {0}")]
    Json(Arc<serde_json::Error>),
    #[error("unsupported dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(Arc::new(error))
    }
}
