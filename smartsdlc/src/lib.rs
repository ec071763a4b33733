//! SmartSDLC: AI-assisted software development lifecycle toolkit.
//!
//! Six thin modules (requirement classification, code generation, bug
//! fixing, test generation, code summarization, chat) wrap user input in a
//! fixed prompt template and forward it to a hosted text-generation
//! endpoint. [`PromptRunner`] is the boundary that always hands back a
//! displayable string, whatever the endpoint did.
//!
//! ```no_run
//! use smartsdlc::{Assistant, WatsonxClient, WatsonxCredentialsBuilder};
//!
//! # async fn demo() -> Result<(), smartsdlc::WatsonxError> {
//! let credentials = WatsonxCredentialsBuilder::from_env().build()?;
//! let assistant = Assistant::new(WatsonxClient::new(credentials));
//! let summary = assistant.summarize_code("print('hi')").await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

mod assistant;
mod runner;

pub use assistant::Assistant;
pub use runner::{PromptRunner, GENERATION_FAILURE_PREFIX};

pub use smartsdlc_core::{
    DecodingMethod, GenerationParams, GenerationReply, GenerationRequest, Message, Role,
    SmartSdlcError, TextGeneration, Transcript, GENERATED_TEXT_KEY, MISSING_FIELD_WARNING,
    UNEXPECTED_TYPE_WARNING,
};
pub use smartsdlc_prompt::{PromptTemplate, SdlcModule};

#[cfg(feature = "watsonx")]
pub use smartsdlc_watsonx::{
    WatsonxClient, WatsonxCredentials, WatsonxCredentialsBuilder, WatsonxError,
};
