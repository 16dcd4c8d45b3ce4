//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for generation, validation and provider calls"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

use crate::validate::ValidationIssue;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, BlogError>;

/// Errors surfaced by the generation pipelines
#[derive(Error, Debug)]
pub enum BlogError {
    /// Provider rejected the credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Provider rate limit or quota exceeded
    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    /// Any other provider failure (transport, 5xx, empty response)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider response is missing TITLE, META or BODY
    #[error("Model output missing TITLE, META, or BODY sections")]
    Format,

    /// Mock or dry-run output failed structural validation
    #[error("Mock/Dry-run generator regression: {}", join_issues(.0))]
    ValidationRegression(Vec<ValidationIssue>),

    /// Live output still invalid after the single repair round
    #[error("Validation failed after repair: {}", join_issues(.0))]
    RepairExhausted(Vec<ValidationIssue>),

    #[error("{0}")]
    OutlineParse(String),

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// Live path requested without a provider backend
    #[error("No provider client configured for live generation")]
    NoClient,

    #[error("Prompt rendering failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlogError {
    /// Process exit code the CLI uses for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::Auth(_) | BlogError::MissingApiKey => 2,
            BlogError::RateLimited(_) => 3,
            BlogError::ValidationRegression(_) => 4,
            _ => 1,
        }
    }

    /// Errors that stop a batch run instead of skipping the topic
    pub fn is_fatal_for_batch(&self) -> bool {
        matches!(
            self,
            BlogError::Auth(_)
                | BlogError::RateLimited(_)
                | BlogError::ValidationRegression(_)
                | BlogError::MissingApiKey
        )
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(BlogError::Auth("bad key".into()).exit_code(), 2);
        assert_eq!(BlogError::MissingApiKey.exit_code(), 2);
        assert_eq!(BlogError::RateLimited("429".into()).exit_code(), 3);
        assert_eq!(BlogError::ValidationRegression(vec![]).exit_code(), 4);
        assert_eq!(BlogError::Format.exit_code(), 1);
    }

    #[test]
    fn test_regression_message_lists_issues() {
        let err = BlogError::ValidationRegression(vec![
            ValidationIssue::MissingH1,
            ValidationIssue::TooFewH2 { found: 2, required: 5 },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Mock/Dry-run generator regression"));
        assert!(msg.contains("Missing H1 title"));
        assert!(msg.contains("Needs at least 5 H2 headings"));
    }

    #[test]
    fn test_batch_fatality() {
        assert!(BlogError::Auth("x".into()).is_fatal_for_batch());
        assert!(!BlogError::Format.is_fatal_for_batch());
        assert!(!BlogError::RepairExhausted(vec![]).is_fatal_for_batch());
    }
}
