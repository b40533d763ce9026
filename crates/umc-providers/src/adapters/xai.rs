//! xAI (Grok) adapter. The API is OpenAI-compatible.

use async_trait::async_trait;

use umc_core::{Credential, Result, Service};

use super::openai_compat::{chat_completion, BearerAuth};
use crate::registry::spec_for;
use crate::traits::Complete;

/// Talks to xAI's chat completions API.
#[derive(Clone, Debug)]
pub struct XaiAdapter {
    client: reqwest::Client,
    api_base: String,
}

impl XaiAdapter {
    /// Create an adapter; `api_base` overrides `https://api.x.ai/v1`.
    pub fn new(client: reqwest::Client, api_base: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base
                .unwrap_or_else(|| spec_for(Service::Xai).default_api_base.to_string()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl Complete for XaiAdapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        chat_completion(
            Service::Xai,
            &self.client,
            &self.api_base,
            BearerAuth::Required,
            model,
            credential,
            prompt,
        )
        .await
    }

    fn service(&self) -> Service {
        Service::Xai
    }
}
