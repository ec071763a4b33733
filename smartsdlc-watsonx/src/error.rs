use thiserror::Error;

use smartsdlc_core::SmartSdlcError;

#[derive(Debug, Error)]
pub enum WatsonxError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("watsonx api error {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<WatsonxError> for SmartSdlcError {
    fn from(value: WatsonxError) -> Self {
        match value {
            WatsonxError::Config(message) => SmartSdlcError::InvalidConfig(message),
            other => SmartSdlcError::Provider(other.to_string()),
        }
    }
}
