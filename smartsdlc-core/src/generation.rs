use serde::{Deserialize, Serialize};

use crate::{GenerationReply, SmartSdlcError};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecodingMethod {
    Sample,
    Greedy,
}

/// Decoding configuration sent with every generation request.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub decoding_method: DecodingMethod,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            temperature: 0.7,
            top_p: 1.0,
            decoding_method: DecodingMethod::Sample,
        }
    }
}

/// A single text-generation call. An empty `model` means "use the client's
/// configured default".
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub input: String,
    #[serde(default)]
    pub params: GenerationParams,
}

impl GenerationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: String::new(),
            input: input.into(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

#[async_trait::async_trait]
pub trait TextGeneration: Send + Sync + 'static {
    async fn generate(&self, request: GenerationRequest)
        -> Result<GenerationReply, SmartSdlcError>;
}
