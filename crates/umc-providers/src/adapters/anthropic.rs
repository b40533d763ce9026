//! Anthropic Messages API adapter.
//!
//! Request: `POST {base}/v1/messages` with `x-api-key` and
//! `anthropic-version` headers. The completion is the first `content`
//! block whose `type` is `"text"`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use umc_core::{Credential, Error, Result, Service};

use crate::http::{join_url, send_json};
use crate::registry::spec_for;
use crate::traits::Complete;

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default `max_tokens`; the Messages API rejects requests without one.
pub const DEFAULT_MAX_TOKENS: u32 = 10_000;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [InputMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Talks to Anthropic's Messages API.
#[derive(Clone, Debug)]
pub struct AnthropicAdapter {
    client: reqwest::Client,
    api_base: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    /// Create an adapter; `api_base` overrides `https://api.anthropic.com`.
    pub fn new(client: reqwest::Client, api_base: Option<String>, max_tokens: u32) -> Self {
        Self {
            client,
            api_base: api_base
                .unwrap_or_else(|| spec_for(Service::Anthropic).default_api_base.to_string()),
            max_tokens,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl Complete for AnthropicAdapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        let url = join_url(&self.api_base, "v1/messages");
        let body = MessagesRequest {
            model,
            max_tokens: self.max_tokens,
            messages: [InputMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(provider = %Service::Anthropic, model = model, max_tokens = self.max_tokens, "Calling messages API");

        let request = self
            .client
            .post(&url)
            .header("x-api-key", credential.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        let response: MessagesResponse = send_json(Service::Anthropic, request, credential).await?;

        response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                Error::response(
                    Service::Anthropic,
                    format!("{model} didn't provide any text response"),
                )
            })
    }

    fn service(&self) -> Service {
        Service::Anthropic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "claude-sonnet-4-20250514";

    fn adapter(base: &str) -> AnthropicAdapter {
        AnthropicAdapter::new(reqwest::Client::new(), Some(base.to_string()), DEFAULT_MAX_TOKENS)
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .and(body_partial_json(serde_json::json!({
                "model": MODEL,
                "max_tokens": 10000,
                "messages": [{ "role": "user", "content": "Hello" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "text", "text": "Hi there!" }],
                "stop_reason": "end_turn"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = adapter(&mock_server.uri())
            .complete(MODEL, &Credential::from("sk-ant-test"), "Hello")
            .await
            .unwrap();
        assert_eq!(text, "Hi there!");
    }

    #[tokio::test]
    async fn test_skips_non_text_blocks() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [
                    { "type": "thinking", "thinking": "hmm" },
                    { "type": "text", "text": "  spaced answer\n" },
                    { "type": "text", "text": "second block" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let text = adapter(&mock_server.uri())
            .complete(MODEL, &Credential::from("k"), "q")
            .await
            .unwrap();
        // Returned verbatim, no trimming
        assert_eq!(text, "  spaced answer\n");
    }

    #[tokio::test]
    async fn test_no_text_block() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{ "type": "tool_use", "id": "t1", "name": "x", "input": {} }]
            })))
            .mount(&mock_server)
            .await;

        let err = adapter(&mock_server.uri())
            .complete(MODEL, &Credential::from("k"), "q")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ProviderResponse { service: Service::Anthropic, .. }));
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "type": "error",
                "error": { "type": "authentication_error", "message": "invalid x-api-key" }
            })))
            .mount(&mock_server)
            .await;

        let err = adapter(&mock_server.uri())
            .complete(MODEL, &Credential::from("sk-ant-bad"), "q")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Authentication { status: 401, .. }));
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[tokio::test]
    async fn test_overloaded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
                "type": "error",
                "error": { "type": "overloaded_error", "message": "Overloaded" }
            })))
            .mount(&mock_server)
            .await;

        let err = adapter(&mock_server.uri())
            .complete(MODEL, &Credential::from("k"), "q")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unavailable { status: 529, .. }));
        assert!(err.is_retryable());
    }
}
