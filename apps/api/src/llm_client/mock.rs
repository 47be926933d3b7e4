//! In-memory `CompletionProvider` for handler and gateway tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{Candidate, CandidateContent, CompletionProvider, ContentPart, LlmError, LlmResponse};

pub enum MockBehavior {
    /// Reply with this text for every prompt.
    Text(String),
    /// Reply with the prompt itself.
    Echo,
    /// Reply successfully with no candidates.
    Empty,
    /// Fail with an API error carrying this message.
    Fail(String),
    /// Sleep before replying with the text.
    Slow(Duration, String),
}

pub struct MockProvider {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

pub fn response_with_text(text: &str) -> LlmResponse {
    LlmResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent {
                parts: vec![ContentPart {
                    text: Some(text.to_string()),
                }],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        ..Default::default()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Text(text) => Ok(response_with_text(text)),
            MockBehavior::Echo => Ok(response_with_text(prompt)),
            MockBehavior::Empty => Ok(LlmResponse::default()),
            MockBehavior::Fail(message) => Err(LlmError::Api {
                status: 429,
                message: message.clone(),
            }),
            MockBehavior::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(response_with_text(text))
            }
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
