pub mod models;
pub mod services;
pub mod traits;

use std::sync::Arc;
use tracing::{info, warn};

use crate::services::chat_api_remote::RemoteChatApi;
use crate::services::requester::CompletionRequester;
use crate::services::settings::{AppConfig, load_config};
use crate::traits::chat_api::ChatApi;

/// Environment variable holding the Databricks personal access token.
pub const TOKEN_ENV: &str = "DATABRICKS_TOKEN";

fn io_err(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(e.to_string())
}

/// High-level entrypoint: load config, init logging, return the completion text.
///
/// `prompt_override` replaces the configured user message when given; the
/// system message and message order stay fixed.
pub async fn run_with_config_path(
    path: &str,
    prompt_override: Option<&str>,
) -> std::io::Result<String> {
    // Load YAML config
    let cfg: AppConfig =
        load_config(path).map_err(|e| io_err(format!("Failed to load {}: {}", path, e)))?;

    // Initialize structured logging (default to info if RUST_LOG not set)
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    // Logs go to stderr; stdout carries only the completion text
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    run_request(cfg, prompt_override).await
}

/// Entrypoint used by `main`: fetch the completion and print it to stdout.
pub async fn run_and_print(path: &str, prompt_override: Option<&str>) -> std::io::Result<()> {
    let text = run_with_config_path(path, prompt_override).await?;
    println!("{}", text);
    Ok(())
}

/// Wires the remote chat backend and issues the single request.
pub async fn run_request(cfg: AppConfig, prompt_override: Option<&str>) -> std::io::Result<String> {
    // The token is env-only: absent means an empty bearer value that the
    // remote rejects. No local validation.
    let token = std::env::var(TOKEN_ENV).unwrap_or_default();
    if token.is_empty() {
        warn!("{} is not set; the serving endpoint will reject the request", TOKEN_ENV);
    }

    let chat_api: Arc<dyn ChatApi> =
        Arc::new(RemoteChatApi::from_config(&cfg.llm, token).map_err(io_err)?);
    let requester = CompletionRequester::from_config(Arc::clone(&chat_api), &cfg.llm);

    let user_prompt = prompt_override
        .map(str::to_string)
        .or_else(|| cfg.llm.user_prompt.clone())
        .unwrap_or_else(|| CompletionRequester::DEFAULT_USER_PROMPT.to_string());

    info!(model = %requester.model(), "sending chat completion request");
    let text = requester.complete(&user_prompt).await.map_err(io_err)?;
    info!(response_len = text.len(), "chat completion received");
    Ok(text)
}
