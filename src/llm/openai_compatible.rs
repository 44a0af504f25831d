use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::interface::{ChatMessage, CompletionProvider};
use crate::config::LlmConfig;

/// OpenAI-compatible completion client (DeepSeek in production).
pub struct OpenAiCompatibleProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: &LlmConfig, api_key: String) -> Self {
        info!(
            "Initialized OpenAiCompatibleProvider: model={}, base_url={}",
            config.model, config.base_url
        );
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatibleProvider {
    async fn complete(&self, messages: Vec<ChatMessage>) -> anyhow::Result<serde_json::Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: self.temperature,
        };

        // Error statuses are not short-circuited: the body is decoded either
        // way and the caller decides what a missing field means.
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let result: serde_json::Value = response.json().await?;
        Ok(result)
    }
}
