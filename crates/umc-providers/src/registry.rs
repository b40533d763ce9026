//! Provider registry — static specs for the five supported services.
//!
//! Each `ProviderSpec` describes how to reach one vendor: where its API
//! lives, which env var conventionally holds its key, and how to show it.

use umc_core::config::Config;
use umc_core::{Credential, Error, Result, Service};

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub service: Service,
    /// Human-readable name for logs and the CLI. E.g. `"Google Gemini"`.
    pub display_name: &'static str,
    /// Environment variable conventionally holding the key. E.g. `"OPENAI_API_KEY"`.
    pub env_key: &'static str,
    /// Default API base URL, without a trailing slash.
    pub default_api_base: &'static str,
    /// Whether requests are rejected without a credential.
    pub requires_credential: bool,
}

/// Complete list of supported provider specifications, in display order.
pub static PROVIDERS: &[ProviderSpec] = &[
    // Aristote dispatcher (CentraleSupélec) — OpenAI-compatible, open access
    ProviderSpec {
        service: Service::Aristote,
        display_name: "Aristote",
        env_key: "ARISTOTE_API_KEY",
        default_api_base: "https://aristote-dispatcher.mydocker-run-vd.centralesupelec.fr/v1",
        requires_credential: false,
    },
    ProviderSpec {
        service: Service::Google,
        display_name: "Google Gemini",
        env_key: "GOOGLE_API_KEY",
        default_api_base: "https://generativelanguage.googleapis.com",
        requires_credential: true,
    },
    ProviderSpec {
        service: Service::Anthropic,
        display_name: "Anthropic",
        env_key: "ANTHROPIC_API_KEY",
        default_api_base: "https://api.anthropic.com",
        requires_credential: true,
    },
    ProviderSpec {
        service: Service::OpenAi,
        display_name: "OpenAI",
        env_key: "OPENAI_API_KEY",
        default_api_base: "https://api.openai.com/v1",
        requires_credential: true,
    },
    ProviderSpec {
        service: Service::Xai,
        display_name: "xAI",
        env_key: "XAI_API_KEY",
        default_api_base: "https://api.x.ai/v1",
        requires_credential: true,
    },
];

/// Find the spec for a service.
///
/// Every `Service` variant has exactly one entry in [`PROVIDERS`].
pub fn spec_for(service: Service) -> &'static ProviderSpec {
    match service {
        Service::Aristote => &PROVIDERS[0],
        Service::Google => &PROVIDERS[1],
        Service::Anthropic => &PROVIDERS[2],
        Service::OpenAi => &PROVIDERS[3],
        Service::Xai => &PROVIDERS[4],
    }
}

/// Resolve a credential from the service's conventional env var.
///
/// An unset or empty variable is an error unless the service accepts
/// anonymous requests.
pub fn credential_from_env(service: Service) -> Result<Credential> {
    resolve_credential(service, None, |key| std::env::var(key).ok())
}

/// Resolve a credential from a loaded config, falling back to the env var.
pub fn credential_from_config(config: &Config, service: Service) -> Result<Credential> {
    let configured = config.providers.get(service);
    resolve_credential(service, Some(configured.api_key.as_str()), |key| {
        std::env::var(key).ok()
    })
}

fn resolve_credential<F>(service: Service, configured: Option<&str>, lookup: F) -> Result<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    let spec = spec_for(service);
    let key = configured
        .filter(|k| !k.is_empty())
        .map(String::from)
        .or_else(|| lookup(spec.env_key).filter(|k| !k.is_empty()));

    match key {
        Some(k) => Ok(Credential::new(k)),
        None if !spec.requires_credential => Ok(Credential::default()),
        None => Err(Error::MissingCredential {
            service,
            env_key: spec.env_key,
        }),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
