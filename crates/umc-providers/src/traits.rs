//! The capability every provider adapter implements.

use async_trait::async_trait;
use umc_core::{Credential, Result, Service};

/// Single-prompt text completion against one vendor.
///
/// Implementations build the vendor's request, perform exactly one HTTP
/// round trip, and return the primary completion text unchanged. Vendor
/// failures are mapped onto [`umc_core::Error`]; the credential must never
/// appear in a returned error or a log line.
#[async_trait]
pub trait Complete: Send + Sync {
    /// Send `prompt` to `model`, authenticated with `credential`.
    async fn complete(&self, model: &str, credential: &Credential, prompt: &str) -> Result<String>;

    /// The service this adapter talks to.
    fn service(&self) -> Service;
}
