use super::http_client::build_client;
use super::scrub::sanitize_api_error;
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::Config;
use crate::error::LlmError;
use reqwest::Client;
use tracing::debug;

/// Model used when resolution is skipped.
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";

const MAX_TOKENS: u32 = 900;
const TEMPERATURE: f64 = 0.2;
const REQUEST_TIMEOUT_SECS: u64 = 20;

const EXTRA_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/vnd.github+json"),
    ("X-GitHub-Api-Version", "2022-11-28"),
];

/// Client for the chat-completions endpoint. One outbound call per
/// [`InferenceClient::complete`] invocation; no retries, no caching.
pub struct InferenceClient {
    endpoint: String,
    /// Pre-computed `"Bearer <token>"` header value.
    cached_auth_header: String,
    client: Client,
}

pub(crate) fn build_request(system_prompt: &str, user_prompt: &str, model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt.to_string(),
            },
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

fn extract_content(response: ChatResponse) -> Option<String> {
    response.choices.into_iter().next()?.message.content
}

impl InferenceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            cached_auth_header: format!("Bearer {}", config.token),
            client: build_client(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Send one system/user prompt pair and return the generated text.
    ///
    /// On a body that parses but lacks `choices[0].message.content`, the
    /// returned [`LlmError::MalformedResponse`] carries the raw body so
    /// the caller can opt into a best-effort dump.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<String, LlmError> {
        let request = build_request(system_prompt, user_prompt, model);
        debug!(model, endpoint = %self.endpoint, "sending completion request");

        let mut request_builder = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.cached_auth_header)
            .json(&request);
        for (name, value) in EXTRA_HEADERS {
            request_builder = request_builder.header(name, value);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|error| LlmError::Request(error.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(LlmError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Http {
                status: status.as_u16(),
                message: sanitize_api_error(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| LlmError::Request(error.to_string()))?;

        let Ok(chat_response) = serde_json::from_str::<ChatResponse>(&body) else {
            return Err(LlmError::MalformedResponse { raw: body });
        };

        extract_content(chat_response).ok_or(LlmError::MalformedResponse { raw: body })
    }
}
