use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::models::types::{ChatRequest, ChatResponse};
use crate::services::settings::LlmConfig;
use crate::traits::chat_api::ChatApi;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `ChatApi` backed by a Databricks model-serving endpoint speaking the
/// OpenAI-style chat-completions schema.
pub struct RemoteChatApi {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
    preview_chars: usize,
}

impl RemoteChatApi {
    pub fn from_config(
        llm: &LlmConfig,
        token: String,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // `Url::join` would drop the last path segment of a base without a
        // trailing slash, so the path is appended textually and re-parsed.
        let base = llm.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}/chat/completions", base))?;
        let timeout = std::time::Duration::from_secs(
            llm.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            token,
            preview_chars: llm.log_response_preview_chars.unwrap_or(200),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatApi for RemoteChatApi {
    async fn chat(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, Box<dyn std::error::Error + Send + Sync>> {
        info!(
            model = %request.model,
            max_tokens = request.max_tokens,
            messages = request.messages.len(),
            endpoint = %self.endpoint,
            "chat request"
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatResponse = resp.json().await?;
        if let Some(first) = parsed.choices.first() {
            let preview: String = first.message.content.chars().take(self.preview_chars).collect();
            info!(
                choices = parsed.choices.len(),
                response_len = first.message.content.len(),
                response_preview = %preview,
                "chat response"
            );
        } else {
            info!(choices = 0, "chat response");
        }
        Ok(parsed)
    }
}
