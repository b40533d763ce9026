//! `umc call` — send one prompt and print the completion.

use std::io::Read;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use umc_core::config::Config;
use umc_core::{Credential, Service};
use umc_providers::registry::credential_from_config;
use umc_providers::{CallerOptions, LlmCaller};

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Prompt text. Read from stdin when omitted or "-".
    pub prompt: Vec<String>,

    /// Service: aristote, google, anthropic, openai, xai (default from config)
    #[arg(short, long)]
    pub service: Option<String>,

    /// Model name (default from config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key (default: config, then the service's env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the service's API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub logs: bool,
}

/// Run the call command.
pub async fn run(args: CallArgs, config: &Config) -> Result<()> {
    let (service, model) = resolve_target(&args, config)?;

    let mut options = CallerOptions::from_config(config, service);
    if let Some(base) = args.api_base.clone() {
        options.api_base = Some(base);
    }
    if let Some(secs) = args.timeout {
        options.timeout = Some(Duration::from_secs(secs));
    }

    let credential = match args.api_key.clone() {
        Some(key) => Credential::new(key),
        None => credential_from_config(config, service)?,
    };

    let caller = LlmCaller::for_service(service, model, credential, options)?;
    let prompt = read_prompt(&args.prompt)?;

    info!(provider = %service, model = caller.model(), "sending prompt");
    let response = caller
        .call(&prompt)
        .await
        .with_context(|| format!("call to {} failed", caller.service()))?;

    crate::helpers::print_response(&response);
    Ok(())
}

/// Pick the service and model from flags, falling back to config defaults.
///
/// The configured default model only applies to the configured default
/// service; naming another service requires naming a model too.
fn resolve_target(args: &CallArgs, config: &Config) -> Result<(Service, String)> {
    let service = match args.service.as_deref() {
        Some(name) => name.parse::<Service>()?,
        None => config.defaults.service,
    };

    let model = match (&args.model, service == config.defaults.service) {
        (Some(model), _) => model.clone(),
        (None, true) => config.defaults.model.clone(),
        (None, false) => bail!("--model is required when --service differs from the configured default ({})", config.defaults.service),
    };

    Ok((service, model))
}

fn read_prompt(words: &[String]) -> Result<String> {
    if words.is_empty() || (words.len() == 1 && words[0] == "-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read prompt from stdin")?;
        return Ok(buf);
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(service: Option<&str>, model: Option<&str>) -> CallArgs {
        CallArgs {
            prompt: vec!["hello".to_string()],
            service: service.map(String::from),
            model: model.map(String::from),
            api_key: None,
            api_base: None,
            timeout: None,
            logs: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let config = Config::default();
        let (svc, model) = resolve_target(&args(None, None), &config).unwrap();
        assert_eq!(svc, config.defaults.service);
        assert_eq!(model, config.defaults.model);
    }

    #[test]
    fn test_resolve_explicit() {
        let (svc, model) =
            resolve_target(&args(Some("Anthropic"), Some("claude-3")), &Config::default()).unwrap();
        assert_eq!(svc, Service::Anthropic);
        assert_eq!(model, "claude-3");
    }

    #[test]
    fn test_resolve_other_service_needs_model() {
        let err = resolve_target(&args(Some("google"), None), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("--model"));
    }

    #[test]
    fn test_resolve_unknown_service() {
        let err = resolve_target(&args(Some("bogus"), Some("m")), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("unsupported provider 'bogus'"));
    }

    #[test]
    fn test_read_prompt_joins_words() {
        let words = vec!["What".to_string(), "is".to_string(), "Rust?".to_string()];
        assert_eq!(read_prompt(&words).unwrap(), "What is Rust?");
    }
}
