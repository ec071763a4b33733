//! IBM watsonx.ai text-generation provider for SmartSDLC.
//!
//! This crate provides a `WatsonxClient` implementing the core
//! `TextGeneration` seam: one POST to the text-generation route per call,
//! with the session constructed fresh each time (no pooling).
//!
//! Environment variables commonly used to configure credentials:
//! - `WATSONX_API_KEY`
//! - `WATSONX_PROJECT_ID`
//! - `WATSONX_BASE_URL`
//! - `WATSONX_MODEL_ID`

mod client;
mod config;
mod error;

pub use client::WatsonxClient;
pub use config::{WatsonxCredentials, WatsonxCredentialsBuilder, DEFAULT_API_VERSION};
pub use error::WatsonxError;
