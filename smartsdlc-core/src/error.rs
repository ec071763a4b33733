use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmartSdlcError {
    #[error("text generation provider failed: {0}")]
    Provider(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
