//! Test double that replays queued responses

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ProviderError, TextProvider};

/// One call seen by a [`ScriptedProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub system: String,
    pub user: String,
}

/// Replays queued replies in order and records every call.
///
/// Running out of replies yields `ProviderError::Other`.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: RefCell<VecDeque<Result<String, ProviderError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, err: ProviderError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl TextProvider for ScriptedProvider {
    fn send(&self, model: &str, system: &str, user: &str) -> Result<String, ProviderError> {
        self.calls.borrow_mut().push(RecordedCall {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Other("No scripted reply left".to_string())))
    }
}
