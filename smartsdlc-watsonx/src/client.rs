use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use smartsdlc_core::{
    GenerationParams, GenerationReply, GenerationRequest, SmartSdlcError, TextGeneration,
};

use crate::{WatsonxCredentials, WatsonxError};

const GENERATION_PATH: &str = "/ml/v1/text/generation";

/// Client for the watsonx.ai text-generation route.
///
/// Holds credentials only; the HTTP session is built fresh on every call,
/// matching the request-per-user-action model. No retries.
#[derive(Clone, Debug)]
pub struct WatsonxClient {
    credentials: WatsonxCredentials,
}

impl WatsonxClient {
    pub fn new(credentials: WatsonxCredentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &WatsonxCredentials {
        &self.credentials
    }

    fn generation_url(&self) -> String {
        format!(
            "{}{}",
            self.credentials.base_url.trim_end_matches('/'),
            GENERATION_PATH
        )
    }

    fn session(&self) -> Result<Client, WatsonxError> {
        Client::builder()
            .timeout(self.credentials.timeout)
            .build()
            .map_err(|err| WatsonxError::Transport(err.to_string()))
    }

    async fn dispatch(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationReply, WatsonxError> {
        let model_id = if request.model.is_empty() {
            self.credentials.model_id.as_str()
        } else {
            request.model.as_str()
        };
        let body = TextGenerationBody {
            model_id,
            project_id: &self.credentials.project_id,
            input: &request.input,
            parameters: &request.params,
        };

        tracing::debug!(model_id = %model_id, "dispatching watsonx text generation request");

        let response = self
            .session()?
            .post(self.generation_url())
            .query(&[("version", self.credentials.api_version.as_str())])
            .bearer_auth(self.credentials.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| WatsonxError::Transport(err.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| WatsonxError::Transport(err.to_string()))?;

        if !status.is_success() {
            let message =
                error_message(&payload).unwrap_or_else(|| format!("HTTP {status}: {payload}"));
            tracing::warn!(status = status.as_u16(), "watsonx generation request rejected");
            return Err(WatsonxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(GenerationReply::from_body(&payload))
    }
}

#[derive(Debug, Serialize)]
struct TextGenerationBody<'a> {
    model_id: &'a str,
    project_id: &'a str,
    input: &'a str,
    parameters: &'a GenerationParams,
}

#[derive(Debug, Deserialize)]
struct WatsonxErrorBody {
    #[serde(default)]
    errors: Vec<WatsonxErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct WatsonxErrorDetail {
    message: String,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<WatsonxErrorBody>(body)
        .ok()
        .and_then(|decoded| decoded.errors.into_iter().next())
        .map(|detail| detail.message)
}

#[async_trait::async_trait]
impl TextGeneration for WatsonxClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, SmartSdlcError> {
        Ok(self.dispatch(&request).await?)
    }
}
