use smartsdlc_core::TextGeneration;
use smartsdlc_prompt::SdlcModule;

use crate::PromptRunner;

/// The six SmartSDLC module operations over a single runner.
///
/// Chat history belongs to the caller: `chat` returns the reply and leaves
/// transcript bookkeeping to whoever owns the `Transcript`.
pub struct Assistant<G> {
    runner: PromptRunner<G>,
}

impl<G: TextGeneration> Assistant<G> {
    pub fn new(generator: G) -> Self {
        Self {
            runner: PromptRunner::new(generator),
        }
    }

    pub fn with_runner(runner: PromptRunner<G>) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &PromptRunner<G> {
        &self.runner
    }

    pub async fn run_module(&self, module: SdlcModule, input: &str) -> String {
        self.runner.run(module.prompt(input)).await
    }

    /// Sort extracted requirement text into SDLC phases.
    pub async fn classify_requirements(&self, requirements: &str) -> String {
        self.run_module(SdlcModule::RequirementClassification, requirements)
            .await
    }

    pub async fn generate_code(&self, description: &str) -> String {
        self.run_module(SdlcModule::CodeGeneration, description).await
    }

    pub async fn fix_code(&self, buggy_code: &str) -> String {
        self.run_module(SdlcModule::BugFix, buggy_code).await
    }

    pub async fn generate_tests(&self, subject: &str) -> String {
        self.run_module(SdlcModule::TestGeneration, subject).await
    }

    pub async fn summarize_code(&self, code: &str) -> String {
        self.run_module(SdlcModule::CodeSummary, code).await
    }

    pub async fn chat(&self, query: &str) -> String {
        self.run_module(SdlcModule::Chat, query).await
    }
}
