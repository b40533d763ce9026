//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use umc_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Default service: {}", cfg.defaults.service);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, save_config};
pub use schema::{Config, ProviderConfig};
