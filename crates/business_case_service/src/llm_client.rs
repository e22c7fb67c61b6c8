use std::collections::VecDeque;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::{ServiceConfig, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LlmMessage {
    pub role: String,
    pub content: String,
}

impl LlmMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub messages: Vec<LlmMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http error: {0}")]
    Http(String),
    #[error("openai error: {0}")]
    OpenAi(String),
    #[error("empty response")]
    EmptyResponse,
    #[error("mock responses exhausted")]
    MockExhausted,
}

pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::Http(e.to_string()))?;
        Ok(Self {
            api_key,
            model,
            base_url,
            client,
        })
    }

    pub fn from_config(cfg: &ServiceConfig) -> Result<Self, LlmError> {
        Self::with_base_url(cfg.api_key.clone(), cfg.model.clone(), cfg.base_url.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = OpenAiRequest {
            model: &self.model,
            messages: &req.messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(req.timeout)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::OpenAi(format!("{status} {text}")));
        }
        let parsed: OpenAiResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;
        Ok(LlmResponse { content })
    }
}

/// Replays scripted replies in order, one per call.
pub struct MockLlm {
    responses: Mutex<VecDeque<String>>,
}

impl MockLlm {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    pub async fn complete(&self, _req: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut guard = self.responses.lock().await;
        let content = guard.pop_front().ok_or(LlmError::MockExhausted)?;
        Ok(LlmResponse { content })
    }
}

pub enum LlmClient {
    OpenAi(OpenAiClient),
    Mock(MockLlm),
}

impl LlmClient {
    pub async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        match self {
            LlmClient::OpenAi(client) => client.complete(req).await,
            LlmClient::Mock(client) => client.complete(req).await,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            LlmClient::OpenAi(client) => client.model(),
            LlmClient::Mock(_) => "mock",
        }
    }
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}
