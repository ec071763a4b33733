use smartsdlc_prompt::SdlcModule;

#[test]
fn classification_prompt_wraps_requirements() {
    let prompt = SdlcModule::RequirementClassification.prompt("Users must reset passwords.");
    assert_eq!(
        prompt,
        "Classify the following requirements into SDLC phases (Requirement, Design, Development, Testing, Deployment):\nUsers must reset passwords."
    );
}

#[test]
fn code_generation_prompt_wraps_description() {
    let prompt = SdlcModule::CodeGeneration.prompt("a REST endpoint for invoices");
    assert_eq!(
        prompt,
        "Generate production-ready Python code for the following description:\na REST endpoint for invoices"
    );
}

#[test]
fn bug_fix_prompt_wraps_code() {
    let prompt = SdlcModule::BugFix.prompt("def f(:\n    pass");
    assert_eq!(
        prompt,
        "Here is some buggy code. Identify and fix the issues:\ndef f(:\n    pass"
    );
}

#[test]
fn test_generation_prompt_wraps_subject() {
    let prompt = SdlcModule::TestGeneration.prompt("the parser module");
    assert_eq!(
        prompt,
        "Write unit test cases (using unittest or pytest) for the following:\nthe parser module"
    );
}

#[test]
fn summary_prompt_wraps_code() {
    let prompt = SdlcModule::CodeSummary.prompt("print('hi')");
    assert_eq!(prompt, "Explain what the following code does:\nprint('hi')");
}

#[test]
fn chat_prompt_frames_user_turn() {
    let prompt = SdlcModule::Chat.prompt("What is CI?");
    assert_eq!(prompt, "User: What is CI?\nAssistant:");
}

#[test]
fn every_module_embeds_input_verbatim() {
    for module in SdlcModule::ALL {
        let prompt = module.prompt("XYZZY-marker");
        assert!(prompt.contains("XYZZY-marker"), "{module:?}");
    }
}

#[test]
fn labels_match_menu_entries() {
    let labels: Vec<&str> = SdlcModule::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Requirement Upload and Classification",
            "AI Code Generator",
            "Bug Fixer",
            "Test Case Generator",
            "Code Summarizer",
            "Floating AI Chatbot Assistant",
        ]
    );
}
