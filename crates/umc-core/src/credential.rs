//! Opaque credential wrapper.

use std::fmt;

/// An API key or bearer token.
///
/// `Debug` and `Display` never print the value; the only way to read it is
/// [`Credential::expose`], which adapters call when building a request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    /// The raw secret, for placing in an auth header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Credential(s)
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Credential(s.to_string())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::utils::REDACTED)
    }
}
