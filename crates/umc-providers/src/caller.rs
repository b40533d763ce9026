//! The caller facade — one provider, one model, one credential, one `call`.
//!
//! ```no_run
//! # async fn demo() -> umc_core::Result<()> {
//! use umc_providers::LlmCaller;
//!
//! let caller = LlmCaller::new("openai", "gpt-4o-mini", "sk-...")?;
//! let answer = caller.call("What is a matrix?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use tracing::{debug, error};

use umc_core::config::Config;
use umc_core::{Credential, Error, Result, Service};

use crate::adapters::{anthropic::DEFAULT_MAX_TOKENS, Adapter};
use crate::registry::{credential_from_config, credential_from_env};
use crate::traits::Complete;

// ─────────────────────────────────────────────
// CallerOptions
// ─────────────────────────────────────────────

/// Transport and request knobs for a caller.
#[derive(Clone, Debug)]
pub struct CallerOptions {
    /// Base URL override (proxy, self-hosted dispatcher, mock server).
    pub api_base: Option<String>,
    /// Overall request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Completion token cap for services that require one.
    pub max_tokens: u32,
}

impl Default for CallerOptions {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl CallerOptions {
    /// Options for `service` taken from a loaded config.
    pub fn from_config(config: &Config, service: Service) -> Self {
        Self {
            api_base: config.providers.get(service).api_base.clone(),
            timeout: config.request.timeout_secs.map(Duration::from_secs),
            max_tokens: config.request.max_tokens,
        }
    }
}

// ─────────────────────────────────────────────
// LlmCaller
// ─────────────────────────────────────────────

/// A unified caller bound to one service and model.
///
/// Immutable after construction and safe to share across tasks; each
/// [`call`](LlmCaller::call) is one independent HTTP round trip.
pub struct LlmCaller {
    service: Service,
    model: String,
    credential: Credential,
    adapter: Adapter,
}

impl fmt::Debug for LlmCaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmCaller")
            .field("service", &self.service)
            .field("model", &self.model)
            .field("api_base", &self.adapter.api_base())
            .finish()
    }
}

impl LlmCaller {
    /// Create a caller for `provider` (case-insensitive service name).
    ///
    /// Fails with [`Error::UnsupportedProvider`] for unknown providers. The
    /// model and credential are not checked until the first call.
    pub fn new(
        provider: &str,
        model: impl Into<String>,
        credential: impl Into<Credential>,
    ) -> Result<Self> {
        Self::with_options(provider, model, credential, CallerOptions::default())
    }

    /// Like [`new`](LlmCaller::new), with explicit options.
    pub fn with_options(
        provider: &str,
        model: impl Into<String>,
        credential: impl Into<Credential>,
        options: CallerOptions,
    ) -> Result<Self> {
        let service: Service = provider.parse()?;
        Self::for_service(service, model, credential, options)
    }

    /// Create a caller whose credential comes from the service's env var
    /// (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, …).
    pub fn from_env(provider: &str, model: impl Into<String>) -> Result<Self> {
        let service: Service = provider.parse()?;
        let credential = credential_from_env(service)?;
        Self::for_service(service, model, credential, CallerOptions::default())
    }

    /// Create a caller from a loaded config: credential (falling back to the
    /// env var), base URL, timeout and token cap.
    pub fn from_config(config: &Config, provider: &str, model: impl Into<String>) -> Result<Self> {
        let service: Service = provider.parse()?;
        let credential = credential_from_config(config, service)?;
        let options = CallerOptions::from_config(config, service);
        Self::for_service(service, model, credential, options)
    }

    /// Create a caller for an already-parsed service.
    pub fn for_service(
        service: Service,
        model: impl Into<String>,
        credential: impl Into<Credential>,
        options: CallerOptions,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::transport(service, e))?;

        let model = model.into();
        debug!(
            provider = %service,
            model = %model,
            api_base = options.api_base.as_deref().unwrap_or("default"),
            "Creating LLM caller"
        );

        Ok(Self {
            service,
            model,
            credential: credential.into(),
            adapter: Adapter::for_service(service, client, options.api_base, options.max_tokens),
        })
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The base URL this caller sends requests to.
    pub fn api_base(&self) -> &str {
        self.adapter.api_base()
    }

    /// Send `prompt` to the configured model and return its text completion.
    ///
    /// Exactly one outbound request per call; no retries, no caching.
    /// Empty or whitespace-only prompts fail with [`Error::EmptyPrompt`]
    /// without touching the network.
    pub async fn call(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }

        debug!(
            provider = %self.service,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Calling LLM"
        );

        match self.adapter.complete(&self.model, &self.credential, prompt).await {
            Ok(text) => {
                debug!(
                    provider = %self.service,
                    model = %self.model,
                    completion_chars = text.chars().count(),
                    "LLM response received"
                );
                Ok(text)
            }
            Err(e) => {
                error!(
                    provider = %self.service,
                    model = %self.model,
                    kind = e.kind(),
                    error = %e,
                    "LLM call failed"
                );
                Err(e)
            }
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
