//! `umc init` — create the config file with defaults.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use umc_core::config::{get_config_path, save_config, Config};

/// Run the init command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    if write_default_config(&path)? {
        println!("  {} created config at {}", "✓".green(), path.display());
        println!();
        println!(
            "  Add API keys under {} or export the service env vars (e.g. OPENAI_API_KEY).",
            "providers.<service>.apiKey".bold()
        );
    } else {
        println!("  {} config already exists at {}", "✓".green(), path.display());
    }
    Ok(())
}

/// Write `Config::default()` to `path` unless a file is already there.
///
/// Returns whether a file was written.
fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
