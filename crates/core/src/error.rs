#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("invalid patient data: {0}")]
    InvalidData(String),
}

pub type RiskResult<T> = std::result::Result<T, RiskError>;
