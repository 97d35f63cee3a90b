//! Walkthrough driver
//!
//! Runs the five demonstration calls in order and prints their results

use super::client::NatarisApi;
use crate::models::chat::DEFAULT_CHAT_MODEL;
use crate::models::{ChatRequest, InferenceOptions, Orchestration};
use crate::utils::logging::truncate_content;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

const INFERENCE_PROMPT: &str = "Explain AI in one sentence.";
const CHAT_PROMPT: &str = "What is quantum computing?";
const ORCHESTRATION_PROMPT: &str = "Research the impact of AI on healthcare";

/// Characters of the chat reply shown in the preview
const CHAT_PREVIEW_CHARS: usize = 80;

/// Run usage → models → inference → chat → orchestrated chat, stopping at
/// the first failure.
pub async fn run_walkthrough<A, W>(api: &A, out: &mut W) -> Result<()>
where
    A: NatarisApi + ?Sized,
    W: Write + Send,
{
    writeln!(out, "=== Nataris API - Rust Example ===\n")?;

    writeln!(out, "1. Checking balance...")?;
    let usage = api.get_usage().await?;
    writeln!(out, "   Balance: ${}", usage.balance_usd)?;
    writeln!(out, "   Requests this period: {}\n", usage.total_requests)?;

    writeln!(out, "2. Available models:")?;
    let models = api.list_models().await?;
    for model in &models.data {
        writeln!(out, "   - {} ({})", model.id, model.model_type)?;
    }
    writeln!(out)?;

    writeln!(out, "3. Making inference request...")?;
    let result = api
        .inference(INFERENCE_PROMPT, InferenceOptions::default())
        .await?;
    writeln!(out, "   Model: {}", result.model)?;
    writeln!(out, "   Response: {}", result.output)?;
    writeln!(out, "   Tokens used: {}\n", result.usage.total_tokens)?;

    writeln!(out, "4. Chat completion...")?;
    let chat = api
        .chat_completion(ChatRequest::user(DEFAULT_CHAT_MODEL, CHAT_PROMPT).with_max_tokens(100))
        .await?;
    let preview = truncate_content(chat.first_content().unwrap_or_default(), CHAT_PREVIEW_CHARS);
    writeln!(out, "   Response: {}\n", preview)?;

    writeln!(out, "5. Orchestrated research workflow...")?;
    let orchestrated = api
        .orchestrated_chat(
            ChatRequest::user(DEFAULT_CHAT_MODEL, ORCHESTRATION_PROMPT)
                .with_orchestration(Orchestration::default()),
        )
        .await?;
    let summary = orchestrated.orchestration_summary();
    debug!(?summary, "Orchestration finished");
    writeln!(out, "   Workflow: {}", summary.workflow_id)?;
    writeln!(out, "   Steps: {}", summary.steps_executed)?;
    writeln!(out, "   Cost: ${}\n", summary.total_cost_usd)?;

    writeln!(out, "=== Done ===")?;
    out.flush()?;

    Ok(())
}
