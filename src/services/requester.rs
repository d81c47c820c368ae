use std::sync::Arc;

use bon::Builder;
use tracing::{debug, info};

use crate::models::types::{ChatMessage, ChatRequest};
use crate::services::settings::LlmConfig;
use crate::traits::chat_api::ChatApi;

/// Service that wraps `ChatApi` and performs the one-shot completion
/// exchange: a fixed (system, user) message pair in, the first choice's
/// content out.
#[derive(Builder)]
pub struct CompletionRequester {
    chat_api: Arc<dyn ChatApi>,
    model: String,
    max_tokens: u32,
    system_prompt: String,
}

impl CompletionRequester {
    pub const DEFAULT_MODEL: &'static str = "databricks-meta-llama-3-1-405b-instruct";
    pub const DEFAULT_MAX_TOKENS: u32 = 256;
    pub const DEFAULT_SYSTEM_PROMPT: &'static str = "You are an AI assistant";
    pub const DEFAULT_USER_PROMPT: &'static str = "What is a mixture of experts model?";

    pub fn from_config(chat_api: Arc<dyn ChatApi>, llm: &LlmConfig) -> Self {
        Self::builder()
            .chat_api(chat_api)
            .model(llm.model.clone().unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()))
            .max_tokens(llm.max_tokens.unwrap_or(Self::DEFAULT_MAX_TOKENS))
            .system_prompt(
                llm.system_prompt
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_SYSTEM_PROMPT.to_string()),
            )
            .build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the two-message exchange and extracts the first choice.
    pub async fn complete(
        &self,
        user_prompt: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(user_prompt),
            ],
        };
        debug!(prompt_len = user_prompt.len(), "complete: request built");

        let response = self.chat_api.chat(&request).await?;
        let first = response
            .choices
            .into_iter()
            .next()
            .ok_or("chat response contained no choices")?;
        info!(response_len = first.message.content.len(), "complete: done");
        Ok(first.message.content)
    }
}
