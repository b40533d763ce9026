//! Core types for the unified model caller.
//!
//! - [`service::Service`] — the closed set of supported LLM vendors
//! - [`credential::Credential`] — redacted API key wrapper
//! - [`error::Error`] — the error taxonomy shared by every adapter
//! - [`config`] — JSON config file + env var overrides
//! - [`utils`] — path helpers and error-body sanitizing

pub mod config;
pub mod credential;
pub mod error;
pub mod service;
pub mod utils;

pub use credential::Credential;
pub use error::{Error, Result};
pub use service::Service;
