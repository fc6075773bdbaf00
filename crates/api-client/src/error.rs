#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("response did not match the expected page shape: {0}")]
    Schema(serde_json::Error),
    #[error("failed to serialize submission payload: {0}")]
    Submission(serde_json::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
