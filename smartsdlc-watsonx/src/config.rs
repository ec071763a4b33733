use std::time::Duration;

use secrecy::SecretString;

use crate::WatsonxError;

pub const DEFAULT_API_VERSION: &str = "2023-05-29";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Credentials and endpoint coordinates, fixed for the process lifetime.
#[derive(Clone, Debug)]
pub struct WatsonxCredentials {
    pub(crate) api_key: SecretString,
    pub(crate) project_id: String,
    pub(crate) base_url: String,
    pub(crate) model_id: String,
    pub(crate) api_version: String,
    pub(crate) timeout: Duration,
}

impl WatsonxCredentials {
    pub fn builder() -> WatsonxCredentialsBuilder {
        WatsonxCredentialsBuilder::default()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Default)]
pub struct WatsonxCredentialsBuilder {
    api_key: Option<SecretString>,
    project_id: Option<String>,
    base_url: Option<String>,
    model_id: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
}

impl WatsonxCredentialsBuilder {
    /// Pre-populate the builder from the standard `WATSONX_*` variables.
    pub fn from_env() -> Self {
        Self::default()
            .api_key_from_env("WATSONX_API_KEY")
            .project_id_from_env("WATSONX_PROJECT_ID")
            .base_url_from_env("WATSONX_BASE_URL")
            .model_id_from_env("WATSONX_MODEL_ID")
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.api_key = if value.trim().is_empty() {
            None
        } else {
            Some(SecretString::new(value))
        };
        self
    }

    pub fn project_id(mut self, value: impl Into<String>) -> Self {
        self.project_id = Some(value.into());
        self
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn model_id(mut self, value: impl Into<String>) -> Self {
        self.model_id = Some(value.into());
        self
    }

    pub fn api_version(mut self, value: impl Into<String>) -> Self {
        self.api_version = Some(value.into());
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn api_key_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self = self.api_key(value);
        }
        self
    }

    pub fn project_id_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.project_id = Some(value);
        }
        self
    }

    pub fn base_url_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.base_url = Some(value);
        }
        self
    }

    pub fn model_id_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.model_id = Some(value);
        }
        self
    }

    pub fn build(self) -> Result<WatsonxCredentials, WatsonxError> {
        let api_key = self
            .api_key
            .ok_or_else(|| WatsonxError::Config("api_key cannot be empty".to_string()))?;
        let project_id = non_empty("project_id", self.project_id)?;
        let base_url = non_empty("base_url", self.base_url)?;
        let model_id = non_empty("model_id", self.model_id)?;

        reqwest::Url::parse(&base_url)
            .map_err(|err| WatsonxError::Config(format!("invalid base_url: {err}")))?;
        if !base_url.starts_with("https://") {
            tracing::warn!(base_url = %base_url, "watsonx base URL is not https");
        }

        Ok(WatsonxCredentials {
            api_key,
            project_id,
            base_url,
            model_id,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

fn non_empty(field: &str, value: Option<String>) -> Result<String, WatsonxError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(WatsonxError::Config(format!("{field} cannot be empty"))),
    }
}
