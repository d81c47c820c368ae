#![allow(dead_code)]

use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "abc123";
pub const MOE_ANSWER: &str =
    "A mixture-of-experts model routes each input to a subset of expert sub-networks.";

pub const COMPLETIONS_PATH: &str = "/serving-endpoints/chat/completions";

/// Base URL pointing the client at the mock server's serving-endpoints root.
pub fn serving_base(server: &MockServer) -> String {
    format!("{}/serving-endpoints", server.uri())
}

/// Writes a config YAML into a fresh temp dir and returns it with the dir
/// (the dir must outlive the test so the file is not cleaned up early).
pub fn render_config(base_url: &str) -> (TempDir, ChildPath) {
    let temp_dir = TempDir::new().unwrap();
    let cfg_file = temp_dir.child("config.yaml");
    cfg_file
        .write_str(&format!(
            "llm:\n  base_url: \"{}\"\n  request_timeout_secs: 5\n",
            base_url
        ))
        .unwrap();
    (temp_dir, cfg_file)
}

/// 200 with one choice, only for requests carrying the test bearer token.
pub async fn mount_chat_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": content}}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Catch-all 401 for any chat-completions request that did not match a more
/// specific mock (wrong or empty bearer value).
pub async fn mount_unauthorized(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(server)
        .await;
}

pub async fn mount_empty_choices(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_server_error(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_garbage_body(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(server)
        .await;
}

/// `std::env` mutation is process-global; callers pair these with
/// `#[serial]`.
pub fn set_token(value: &str) {
    unsafe { std::env::set_var(dbxchat::TOKEN_ENV, value) }
}

pub fn clear_token() {
    unsafe { std::env::remove_var(dbxchat::TOKEN_ENV) }
}
