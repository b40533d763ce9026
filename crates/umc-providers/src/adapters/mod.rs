//! Per-vendor adapters and the closed [`Adapter`] set the caller dispatches over.

pub mod anthropic;
pub mod aristote;
pub mod google;
pub mod openai;
mod openai_compat;
pub mod xai;

use async_trait::async_trait;

use umc_core::{Credential, Result, Service};

use crate::traits::Complete;

pub use anthropic::AnthropicAdapter;
pub use aristote::AristoteAdapter;
pub use google::GoogleAdapter;
pub use openai::OpenAiAdapter;
pub use xai::XaiAdapter;

/// One adapter per supported service, chosen once when a caller is built.
#[derive(Clone, Debug)]
pub enum Adapter {
    Aristote(AristoteAdapter),
    Google(GoogleAdapter),
    Anthropic(AnthropicAdapter),
    OpenAi(OpenAiAdapter),
    Xai(XaiAdapter),
}

impl Adapter {
    /// Build the adapter for `service`.
    ///
    /// `api_base` overrides the vendor default; `max_tokens` is only used by
    /// services whose API requires it.
    pub fn for_service(
        service: Service,
        client: reqwest::Client,
        api_base: Option<String>,
        max_tokens: u32,
    ) -> Self {
        match service {
            Service::Aristote => Adapter::Aristote(AristoteAdapter::new(client, api_base)),
            Service::Google => Adapter::Google(GoogleAdapter::new(client, api_base)),
            Service::Anthropic => {
                Adapter::Anthropic(AnthropicAdapter::new(client, api_base, max_tokens))
            }
            Service::OpenAi => Adapter::OpenAi(OpenAiAdapter::new(client, api_base)),
            Service::Xai => Adapter::Xai(XaiAdapter::new(client, api_base)),
        }
    }

    /// The base URL requests are sent to.
    pub fn api_base(&self) -> &str {
        match self {
            Adapter::Aristote(a) => a.api_base(),
            Adapter::Google(a) => a.api_base(),
            Adapter::Anthropic(a) => a.api_base(),
            Adapter::OpenAi(a) => a.api_base(),
            Adapter::Xai(a) => a.api_base(),
        }
    }
}

#[async_trait]
impl Complete for Adapter {
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String> {
        match self {
            Adapter::Aristote(a) => a.complete(model, credential, prompt).await,
            Adapter::Google(a) => a.complete(model, credential, prompt).await,
            Adapter::Anthropic(a) => a.complete(model, credential, prompt).await,
            Adapter::OpenAi(a) => a.complete(model, credential, prompt).await,
            Adapter::Xai(a) => a.complete(model, credential, prompt).await,
        }
    }

    fn service(&self) -> Service {
        match self {
            Adapter::Aristote(a) => a.service(),
            Adapter::Google(a) => a.service(),
            Adapter::Anthropic(a) => a.service(),
            Adapter::OpenAi(a) => a.service(),
            Adapter::Xai(a) => a.service(),
        }
    }
}
