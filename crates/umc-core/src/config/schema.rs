//! Configuration schema.
//!
//! Hierarchy: `Config` → `DefaultsConfig`, `ProvidersConfig`, `RequestConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::service::Service;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.umc/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub providers: ProvidersConfig,
    pub request: RequestConfig,
}

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

/// Service and model used when the CLI is not told otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultsConfig {
    pub service: Service,
    pub model: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            service: Service::OpenAi,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Credential and endpoint override for a single service.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Custom API base URL (overrides the service default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl ProviderConfig {
    /// Whether this provider has a configured API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &if self.is_configured() { "<set>" } else { "<unset>" })
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// One `ProviderConfig` per supported service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    pub aristote: ProviderConfig,
    pub google: ProviderConfig,
    pub anthropic: ProviderConfig,
    pub openai: ProviderConfig,
    pub xai: ProviderConfig,
}

impl ProvidersConfig {
    /// Get the config block for a service.
    pub fn get(&self, service: Service) -> &ProviderConfig {
        match service {
            Service::Aristote => &self.aristote,
            Service::Google => &self.google,
            Service::Anthropic => &self.anthropic,
            Service::OpenAi => &self.openai,
            Service::Xai => &self.xai,
        }
    }

    /// Get the config block for a service, mutably.
    pub fn get_mut(&mut self, service: Service) -> &mut ProviderConfig {
        match service {
            Service::Aristote => &mut self.aristote,
            Service::Google => &mut self.google,
            Service::Anthropic => &mut self.anthropic,
            Service::OpenAi => &mut self.openai,
            Service::Xai => &mut self.xai,
        }
    }
}

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

/// Per-request options applied to every call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestConfig {
    /// Overall request timeout in seconds. `None` keeps the transport default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Completion token cap, sent to services that require one (Anthropic).
    pub max_tokens: u32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            max_tokens: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.service, Service::OpenAi);
        assert_eq!(config.request.max_tokens, 10_000);
        assert!(config.request.timeout_secs.is_none());
        for svc in Service::ALL {
            assert!(!config.providers.get(svc).is_configured());
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = serde_json::json!({
            "providers": {
                "anthropic": { "apiKey": "sk-ant-test" }
            }
        });
        let config: Config = serde_json::from_value(json).unwrap();
        assert!(config.providers.anthropic.is_configured());
        assert!(!config.providers.openai.is_configured());
        assert_eq!(config.defaults.model, "gpt-4o-mini");
    }

    #[test]
    fn test_defaults_service_parses_lowercase() {
        let json = serde_json::json!({
            "defaults": { "service": "google", "model": "gemini-2.0-flash" }
        });
        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.defaults.service, Service::Google);
        assert_eq!(config.defaults.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_get_mut_targets_right_block() {
        let mut providers = ProvidersConfig::default();
        providers.get_mut(Service::Xai).api_key = "xai-key".to_string();
        assert!(providers.xai.is_configured());
        assert!(providers.get(Service::Xai).is_configured());
        assert!(!providers.get(Service::OpenAi).is_configured());
    }

    #[test]
    fn test_provider_debug_hides_key() {
        let cfg = ProviderConfig {
            api_key: "sk-very-secret".to_string(),
            api_base: None,
        };
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<set>"));
    }
}
