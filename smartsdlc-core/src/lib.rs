mod error;
mod generation;
mod message;
mod reply;

pub use error::SmartSdlcError;
pub use generation::{DecodingMethod, GenerationParams, GenerationRequest, TextGeneration};
pub use message::{Message, Role, Transcript};
pub use reply::{
    GenerationReply, GENERATED_TEXT_KEY, MISSING_FIELD_WARNING, UNEXPECTED_TYPE_WARNING,
};

pub type Value = serde_json::Value;
