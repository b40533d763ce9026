//! umc CLI — entry point.
//!
//! # Commands
//!
//! - `umc call [-s SERVICE] [-m MODEL] PROMPT…` — one prompt, one completion
//! - `umc services` — list supported services and credential status
//! - `umc init` — write a default config file

mod call;
mod helpers;
mod init;
mod services;

use anyhow::Result;
use clap::{Parser, Subcommand};

use umc_core::config::load_config;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// umc — one prompt interface over Aristote, Gemini, Claude, GPT and Grok
#[derive(Parser)]
#[command(name = "umc", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.umc/config.json)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt to a model and print the completion
    Call(call::CallArgs),

    /// List supported services and whether a credential is configured
    Services,

    /// Create the config file with defaults
    Init,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(helpers::expand_tilde);

    match cli.command {
        Commands::Call(args) => {
            init_logging(args.logs);
            let config = load_config(config_path.as_deref());
            call::run(args, &config).await
        }
        Commands::Services => {
            init_logging(false);
            services::run(config_path.as_deref())
        }
        Commands::Init => init::run(config_path.as_deref()),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("umc=debug,umc_core=debug,umc_providers=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
