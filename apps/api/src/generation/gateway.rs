//! Generation Gateway — sends a prompt to the completion provider and maps the
//! outcome onto `GenerationError`.
//!
//! # Task offload
//! The provider call runs on its own tokio task. It takes owned data (required for
//! the `'static` bound of `tokio::spawn`) and the calling request awaits its
//! `JoinHandle`; on timeout the task is aborted. One attempt per request; no retries.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::CompletionProvider;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider answered but the completion carried no text.
    #[error("No questions generated.")]
    EmptyGeneration,

    /// The provider call itself failed. Holds the provider's message.
    #[error("{0}")]
    Provider(String),
}

#[derive(Clone)]
pub struct GenerationGateway {
    provider: Arc<dyn CompletionProvider>,
    timeout: Option<Duration>,
}

impl GenerationGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>, timeout: Option<Duration>) -> Self {
        Self { provider, timeout }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Returns the non-empty completion text for `prompt`.
    pub async fn generate(&self, prompt: String) -> Result<String, GenerationError> {
        let provider = Arc::clone(&self.provider);
        let mut call = tokio::spawn(async move { provider.complete(&prompt).await });

        let joined = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut call).await {
                Ok(joined) => joined,
                Err(_) => {
                    call.abort();
                    warn!("Provider call exceeded {}s", limit.as_secs_f64());
                    return Err(GenerationError::Provider(format!(
                        "provider call timed out after {}s",
                        limit.as_secs_f64()
                    )));
                }
            },
            None => call.await,
        };

        let response = joined
            .map_err(|e| GenerationError::Provider(format!("provider task failed: {e}")))?
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        let text = response.text().ok_or(GenerationError::EmptyGeneration)?;
        debug!("Provider returned {} bytes of text", text.len());
        Ok(text)
    }
}
