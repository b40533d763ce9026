//! OpenAI chat-completions wire shape, shared by OpenAI, xAI and Aristote.
//!
//! Request: `POST {base}/chat/completions` with
//! `{"model": …, "messages": [{"role": "user", "content": …}]}`.
//! Completion text: `choices[0].message.content`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use umc_core::{Credential, Error, Result, Service};

use crate::http::{join_url, send_json};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// How the credential is attached to a chat-completions request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BearerAuth {
    /// Always send `Authorization: Bearer <credential>`.
    Required,
    /// Send the header only when the credential is non-empty.
    IfPresent,
}

/// Perform one chat-completions round trip and extract the first choice's text.
pub(crate) async fn chat_completion(
    service: Service,
    client: &reqwest::Client,
    api_base: &str,
    auth: BearerAuth,
    model: &str,
    credential: &Credential,
    prompt: &str,
) -> Result<String> {
    let url = join_url(api_base, "chat/completions");
    let body = ChatCompletionRequest {
        model,
        messages: [ChatMessage {
            role: "user",
            content: prompt,
        }],
    };

    debug!(provider = %service, model = model, "Calling chat completions");

    let mut request = client.post(&url).json(&body);
    if auth == BearerAuth::Required || !credential.is_empty() {
        request = request.bearer_auth(credential.expose());
    }

    let response: ChatCompletionResponse = send_json(service, request, credential).await?;
    extract_text(service, model, response)
}

fn extract_text(service: Service, model: &str, response: ChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::response(service, format!("{model} returned no choices")))?;

    match choice.message.content {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::response(
            service,
            format!("{model} didn't provide any text result"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "gpt-4",
                "messages": [{ "role": "user", "content": "hi" }]
            })
        );
    }

    #[test]
    fn test_extract_first_choice() {
        let resp = parse(serde_json::json!({
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }));
        assert_eq!(extract_text(Service::OpenAi, "gpt-4", resp).unwrap(), "first");
    }

    #[test]
    fn test_extract_null_content() {
        let resp = parse(serde_json::json!({
            "choices": [{ "message": { "content": null, "tool_calls": [] } }]
        }));
        let err = extract_text(Service::OpenAi, "gpt-4", resp).unwrap_err();
        assert!(matches!(err, Error::ProviderResponse { service: Service::OpenAi, .. }));
    }

    #[test]
    fn test_extract_no_choices() {
        let resp = parse(serde_json::json!({ "choices": [] }));
        let err = extract_text(Service::Xai, "grok-2", resp).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_missing_choices_field_is_empty() {
        let resp = parse(serde_json::json!({ "id": "x" }));
        assert!(extract_text(Service::Aristote, "m", resp).is_err());
    }
}
