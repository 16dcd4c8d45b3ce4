//! @acp:module "Text Providers"
//! @acp:summary "Capability trait for text-generation backends"
//! @acp:domain generation
//! @acp:layer service
//!
//! The pipelines only need one capability: send a system + user message pair
//! and get text back, or a classified failure. The live backend talks to an
//! OpenAI-compatible HTTP API; the scripted backend replays canned responses
//! for tests.

mod openai;
mod scripted;

pub use openai::{OpenAiProvider, DEFAULT_BASE_URL};
pub use scripted::{RecordedCall, ScriptedProvider};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::BlogError;

/// Classified provider failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Other(String),
}

impl From<ProviderError> for BlogError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Auth(msg) => BlogError::Auth(msg),
            ProviderError::RateLimited(msg) => BlogError::RateLimited(msg),
            ProviderError::Other(msg) => BlogError::Provider(msg),
        }
    }
}

/// Text-generation backend
pub trait TextProvider {
    /// Send one system + user message pair and return the reply text
    fn send(&self, model: &str, system: &str, user: &str) -> Result<String, ProviderError>;
}

impl<T: TextProvider + ?Sized> TextProvider for &T {
    fn send(&self, model: &str, system: &str, user: &str) -> Result<String, ProviderError> {
        (**self).send(model, system, user)
    }
}

impl<T: TextProvider + ?Sized> TextProvider for Box<T> {
    fn send(&self, model: &str, system: &str, user: &str) -> Result<String, ProviderError> {
        (**self).send(model, system, user)
    }
}

/// Provider identity selected on the command line or in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    /// Always resolves to the deterministic placeholder path
    Mock,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Mock => "mock",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
