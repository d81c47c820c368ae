use async_trait::async_trait;

use crate::models::types::{ChatRequest, ChatResponse};

/// Defines the interface for a chat-based language model API.
///
/// This trait allows consumers to abstract over different backend implementations
/// (e.g., real HTTP clients, mocks for testing).
///
/// Any implementation must be thread-safe (`Send + Sync`) and provide an asynchronous
/// method for submitting a chat request and receiving the model's response.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Submits one chat request and returns the raw response.
    async fn chat(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, Box<dyn std::error::Error + Send + Sync>>;
}
