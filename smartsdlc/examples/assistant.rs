//! End-to-end demo against a live watsonx.ai endpoint.
//!
//! Expects `WATSONX_API_KEY`, `WATSONX_PROJECT_ID`, `WATSONX_BASE_URL` and
//! `WATSONX_MODEL_ID` in the environment.

use smartsdlc::{Assistant, Transcript, WatsonxClient, WatsonxCredentialsBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = WatsonxCredentialsBuilder::from_env().build()?;
    let assistant = Assistant::new(WatsonxClient::new(credentials));

    let summary = assistant
        .summarize_code("def add(a, b):\n    return a + b")
        .await;
    println!("summary:\n{summary}\n");

    let mut transcript = Transcript::new();
    let query = "Which SDLC phase does code review belong to?";
    transcript.user(query);
    let reply = assistant.chat(query).await;
    transcript.assistant(&reply);

    for message in transcript.iter() {
        println!("{:?}: {}", message.role, message.content);
    }

    Ok(())
}
