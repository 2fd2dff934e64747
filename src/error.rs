use thiserror::Error;

#[derive(Error, Debug)]
pub enum FailLensError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FailLensError>;
