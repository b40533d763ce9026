//! Aristote adapter — CentraleSupélec's OpenAI-compatible model dispatcher.
//!
//! The public dispatcher accepts anonymous requests, so the bearer header
//! is only attached when a credential was supplied.

use async_trait::async_trait;

use umc_core::{Credential, Result, Service};

use super::openai_compat::{chat_completion, BearerAuth};
use crate::registry::spec_for;
use crate::traits::Complete;

/// Talks to an Aristote dispatcher.
#[derive(Clone, Debug)]
pub struct AristoteAdapter {
    client: reqwest::Client,
    api_base: String,
}

impl AristoteAdapter {
    /// Create an adapter; `api_base` overrides the public dispatcher URL.
    pub fn new(client: reqwest::Client, api_base: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base
                .unwrap_or_else(|| spec_for(Service::Aristote).default_api_base.to_string()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl Complete for AristoteAdapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        chat_completion(
            Service::Aristote,
            &self.client,
            &self.api_base,
            BearerAuth::IfPresent,
            model,
            credential,
            prompt,
        )
        .await
    }

    fn service(&self) -> Service {
        Service::Aristote
    }
}
