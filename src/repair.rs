//! @acp:module "Repair Orchestrator"
//! @acp:summary "Validate a body and run at most one provider repair round"
//! @acp:domain generation
//! @acp:layer service

use crate::error::{BlogError, Result};
use crate::prompts::{PromptBuilder, SYSTEM_MESSAGE};
use crate::provider::TextProvider;
use crate::synth::GenerationRequest;
use crate::validate::{validate, ValidationIssue, ValidationMode};

/// What to do when a body fails validation
pub enum RepairStrategy<'a> {
    /// Placeholder output: any failure is a generator regression
    FailFast,
    /// Live output: ask the provider for one repair
    Live {
        provider: &'a dyn TextProvider,
        prompts: &'a PromptBuilder,
        model: &'a str,
        request: &'a GenerationRequest,
    },
}

/// Ask the provider to fix the listed issues, keeping existing content
pub fn repair_body(
    provider: &dyn TextProvider,
    prompts: &PromptBuilder,
    model: &str,
    request: &GenerationRequest,
    mode: ValidationMode,
    issues: &[ValidationIssue],
    body: &str,
) -> Result<String> {
    let user = prompts.repair(request, mode, issues, body)?;
    let repaired = provider.send(model, SYSTEM_MESSAGE, &user)?;
    Ok(repaired)
}

/// Return `body` if it passes, otherwise apply `strategy`.
///
/// The live path re-validates the trimmed repair once; a second failure is
/// [`BlogError::RepairExhausted`].
pub fn ensure_valid(
    body: String,
    mode: ValidationMode,
    strategy: RepairStrategy<'_>,
) -> Result<String> {
    let issues = validate(&body, mode);
    if issues.is_empty() {
        return Ok(body);
    }

    match strategy {
        RepairStrategy::FailFast => {
            tracing::warn!(?mode, count = issues.len(), "placeholder output failed validation");
            Err(BlogError::ValidationRegression(issues))
        }
        RepairStrategy::Live {
            provider,
            prompts,
            model,
            request,
        } => {
            tracing::warn!(?mode, count = issues.len(), "validation failed, requesting repair");
            let repaired = repair_body(provider, prompts, model, request, mode, &issues, &body)?;
            let repaired = repaired.trim().to_string();

            let remaining = validate(&repaired, mode);
            if !remaining.is_empty() {
                tracing::warn!(count = remaining.len(), "repair round did not fix the body");
                return Err(BlogError::RepairExhausted(remaining));
            }
            Ok(repaired)
        }
    }
}
