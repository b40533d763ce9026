//! Google Gemini adapter (Generative Language API, `generateContent`).
//!
//! The key travels in the `x-goog-api-key` header rather than the `?key=`
//! query parameter, so it can never show up in a URL attached to a
//! transport error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use umc_core::{Credential, Error, Result, Service};

use crate::http::{join_url, send_json};
use crate::registry::spec_for;
use crate::traits::Complete;

/// Marker Google puts in the body of a 400 caused by a bad key.
const INVALID_KEY_REASON: &str = "API_KEY_INVALID";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Talks to the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GoogleAdapter {
    client: reqwest::Client,
    api_base: String,
}

impl GoogleAdapter {
    /// Create an adapter; `api_base` overrides `https://generativelanguage.googleapis.com`.
    pub fn new(client: reqwest::Client, api_base: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base
                .unwrap_or_else(|| spec_for(Service::Google).default_api_base.to_string()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{base}/v1beta/models/{model}:generateContent`; accepts `models/…` names too.
    fn generate_url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        join_url(
            &self.api_base,
            &format!("v1beta/models/{model}:generateContent"),
        )
    }
}

#[async_trait]
impl Complete for GoogleAdapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };

        debug!(provider = %Service::Google, model = model, "Calling generateContent");

        let request = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", credential.expose())
            .json(&body);

        let response: GenerateContentResponse =
            match send_json(Service::Google, request, credential).await {
                Ok(r) => r,
                Err(Error::Request {
                    service,
                    status,
                    message,
                }) if message.contains(INVALID_KEY_REASON) => {
                    return Err(Error::Authentication {
                        service,
                        status,
                        message,
                    })
                }
                Err(e) => return Err(e),
            };

        extract_text(model, response)
    }

    fn service(&self) -> Service {
        Service::Google
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(model: &str, response: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("{model} blocked the prompt ({r})"))
            .unwrap_or_else(|| format!("{model} returned no candidates"));
        return Err(Error::response(Service::Google, reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let finish = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(Error::response(
            Service::Google,
            format!("{model} returned no text (finish reason: {finish})"),
        ));
    }

    Ok(text)
}
