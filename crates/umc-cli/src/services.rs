//! `umc services` — show config path, defaults, and per-service status.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use umc_core::config::{get_config_path, load_config, Config};
use umc_providers::registry::{ProviderSpec, PROVIDERS};

/// Where a service's credential would come from, if anywhere.
fn credential_source(config: &Config, spec: &ProviderSpec) -> Option<&'static str> {
    if config.providers.get(spec.service).is_configured() {
        Some("config")
    } else if std::env::var(spec.env_key).is_ok_and(|v| !v.is_empty()) {
        Some(spec.env_key)
    } else {
        None
    }
}

/// Run the services command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path);
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    println!();
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        path.display(),
        if path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );
    println!(
        "  {:<18} {} / {}",
        "Default:".bold(),
        config.defaults.service,
        config.defaults.model
    );

    println!();
    println!("  {}", "Services:".bold());

    for spec in PROVIDERS {
        let status = match credential_source(&config, spec) {
            Some(source) => format!("{} (key from {})", "✓".green(), source),
            None if !spec.requires_credential => format!("{}", "· open access".dimmed()),
            None => format!("{} {}", "· not configured".dimmed(), format!("(set {})", spec.env_key).dimmed()),
        };
        let base = config
            .providers
            .get(spec.service)
            .api_base
            .as_deref()
            .unwrap_or(spec.default_api_base);

        println!(
            "    {:<10} {:<14} {}",
            spec.service.as_str(),
            spec.display_name,
            status
        );
        println!("    {:<10} {}", "", base.dimmed());
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use umc_core::Service;
    use umc_providers::spec_for;

    #[test]
    fn test_config_key_wins() {
        let mut config = Config::default();
        config.providers.xai.api_key = "xai-key".to_string();
        assert_eq!(credential_source(&config, spec_for(Service::Xai)), Some("config"));
    }
}
