//! OpenAI adapter (`/v1/chat/completions`, bearer auth).

use async_trait::async_trait;

use umc_core::{Credential, Result, Service};

use super::openai_compat::{chat_completion, BearerAuth};
use crate::registry::spec_for;
use crate::traits::Complete;

/// Talks to OpenAI's chat completions API.
#[derive(Clone, Debug)]
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_base: String,
}

impl OpenAiAdapter {
    /// Create an adapter; `api_base` overrides `https://api.openai.com/v1`.
    pub fn new(client: reqwest::Client, api_base: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base
                .unwrap_or_else(|| spec_for(Service::OpenAi).default_api_base.to_string()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl Complete for OpenAiAdapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        chat_completion(
            Service::OpenAi,
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
        Service::OpenAi
    }
}
