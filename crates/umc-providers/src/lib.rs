//! LLM provider layer: one call interface over several vendor HTTP APIs.
//!
//! # Architecture
//!
//! - [`traits::Complete`] — capability every adapter implements
//! - [`adapters`] — Aristote, Google Gemini, Anthropic, OpenAI and xAI adapters
//! - [`registry`] — static per-service specs (env var, default base URL)
//! - [`caller::LlmCaller`] — the facade consumers construct and `call`

pub mod adapters;
pub mod caller;
pub mod http;
pub mod registry;
pub mod traits;

pub use adapters::Adapter;
pub use caller::{CallerOptions, LlmCaller};
pub use registry::{spec_for, ProviderSpec, PROVIDERS};
pub use traits::Complete;
