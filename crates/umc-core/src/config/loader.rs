//! Config loader — reads `~/.umc/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.umc/config.json`
//! 3. Environment variables `UMC_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::schema::Config;
use crate::service::Service;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path (or `path`) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    apply_env_overrides(load_config_from_path(&config_path), |key| {
        std::env::var(key).ok()
    })
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `UMC_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `UMC_DEFAULTS__SERVICE` → `defaults.service`
/// - `UMC_DEFAULTS__MODEL` → `defaults.model`
/// - `UMC_PROVIDERS__<NAME>__API_KEY` → `providers.<name>.api_key`
/// - `UMC_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
/// - `UMC_REQUEST__TIMEOUT_SECS` → `request.timeout_secs`
/// - `UMC_REQUEST__MAX_TOKENS` → `request.max_tokens`
///
/// Values that fail to parse are ignored with a warning.
fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("UMC_DEFAULTS__SERVICE") {
        match val.parse::<Service>() {
            Ok(svc) => config.defaults.service = svc,
            Err(e) => warn!("Ignoring UMC_DEFAULTS__SERVICE: {}", e),
        }
    }
    if let Some(val) = lookup("UMC_DEFAULTS__MODEL") {
        config.defaults.model = val;
    }

    for svc in Service::ALL {
        let name = svc.as_str().to_uppercase();
        let provider = config.providers.get_mut(svc);
        if let Some(val) = lookup(&format!("UMC_PROVIDERS__{name}__API_KEY")) {
            provider.api_key = val;
        }
        if let Some(val) = lookup(&format!("UMC_PROVIDERS__{name}__API_BASE")) {
            provider.api_base = Some(val);
        }
    }

    if let Some(val) = lookup("UMC_REQUEST__TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(secs) => config.request.timeout_secs = Some(secs),
            Err(_) => warn!("Ignoring UMC_REQUEST__TIMEOUT_SECS={}", val),
        }
    }
    if let Some(val) = lookup("UMC_REQUEST__MAX_TOKENS") {
        match val.parse::<u32>() {
            Ok(n) => config.request.max_tokens = n,
            Err(_) => warn!("Ignoring UMC_REQUEST__MAX_TOKENS={}", val),
        }
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
