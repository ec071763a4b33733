use serde::{Deserialize, Serialize};

use crate::PromptTemplate;

/// The six assistant modules, in menu order. Each wraps user input in a
/// fixed one-line template; module selection itself belongs to the UI layer.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SdlcModule {
    RequirementClassification,
    CodeGeneration,
    BugFix,
    TestGeneration,
    CodeSummary,
    Chat,
}

impl SdlcModule {
    pub const ALL: [SdlcModule; 6] = [
        SdlcModule::RequirementClassification,
        SdlcModule::CodeGeneration,
        SdlcModule::BugFix,
        SdlcModule::TestGeneration,
        SdlcModule::CodeSummary,
        SdlcModule::Chat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RequirementClassification => "Requirement Upload and Classification",
            Self::CodeGeneration => "AI Code Generator",
            Self::BugFix => "Bug Fixer",
            Self::TestGeneration => "Test Case Generator",
            Self::CodeSummary => "Code Summarizer",
            Self::Chat => "Floating AI Chatbot Assistant",
        }
    }

    pub fn template(&self) -> PromptTemplate {
        PromptTemplate::new(match self {
            Self::RequirementClassification => {
                "Classify the following requirements into SDLC phases (Requirement, Design, Development, Testing, Deployment):\n{{input}}"
            }
            Self::CodeGeneration => {
                "Generate production-ready Python code for the following description:\n{{input}}"
            }
            Self::BugFix => "Here is some buggy code. Identify and fix the issues:\n{{input}}",
            Self::TestGeneration => {
                "Write unit test cases (using unittest or pytest) for the following:\n{{input}}"
            }
            Self::CodeSummary => "Explain what the following code does:\n{{input}}",
            Self::Chat => "User: {{input}}\nAssistant:",
        })
    }

    /// Build the full prompt for this module around `input`.
    pub fn prompt(&self, input: &str) -> String {
        self.template().render_one("input", input)
    }
}
