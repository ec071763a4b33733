use smartsdlc_core::{GenerationParams, GenerationRequest, TextGeneration};

/// Prefix of the diagnostic string returned when generation fails.
pub const GENERATION_FAILURE_PREFIX: &str = "❌ Watsonx Error: ";

/// Stateless bridge between a prompt string and a text-generation backend.
///
/// `run` always yields a displayable string: replies are normalized, and
/// any failure is folded into a marker-prefixed diagnostic. No error
/// crosses this boundary and nothing is retried.
pub struct PromptRunner<G> {
    generator: G,
    params: GenerationParams,
}

impl<G: TextGeneration> PromptRunner<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub async fn run(&self, prompt: impl Into<String>) -> String {
        let request = GenerationRequest::new(prompt).with_params(self.params);
        match self.generator.generate(request).await {
            Ok(reply) => reply.into_display_text(),
            Err(err) => {
                tracing::warn!(error = %err, "text generation failed");
                format!("{GENERATION_FAILURE_PREFIX}{err}")
            }
        }
    }
}
