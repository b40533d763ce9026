//! Error taxonomy shared by the caller facade and every provider adapter.
//!
//! Vendor-specific failure shapes never leak past the adapter: each one is
//! mapped onto a variant here. No variant ever carries the credential.

use thiserror::Error;

use crate::service::Service;

/// Errors surfaced by construction and by `call`.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider identifier is not one of the supported services.
    #[error("unsupported provider '{name}' (expected one of: aristote, google, anthropic, openai, xai)")]
    UnsupportedProvider { name: String },

    /// No credential was found where one was required.
    #[error("{service}: missing credential (set {env_key})")]
    MissingCredential {
        service: Service,
        env_key: &'static str,
    },

    /// The prompt was empty or whitespace-only.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The vendor rejected the credential.
    #[error("{service}: authentication failed ({status}): {message}")]
    Authentication {
        service: Service,
        status: u16,
        message: String,
    },

    /// The vendor rejected the request itself (unknown model, bad body, …).
    ///
    /// `status` is 0 when the request could not be built and was never sent.
    #[error("{service}: request rejected ({status}): {message}")]
    Request {
        service: Service,
        status: u16,
        message: String,
    },

    /// The vendor is throttling this credential.
    #[error("{service}: rate limited: {message}")]
    RateLimited { service: Service, message: String },

    /// The vendor answered with a server-side failure.
    #[error("{service}: provider unavailable ({status}): {message}")]
    Unavailable {
        service: Service,
        status: u16,
        message: String,
    },

    /// The vendor could not be reached (connect, timeout, IO).
    #[error("{service}: transport error: {source}")]
    Transport {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The vendor answered, but not with text this layer can extract.
    #[error("{service}: unexpected response: {reason}")]
    ProviderResponse { service: Service, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a transport error, dropping the request URL from the source.
    pub fn transport(service: Service, source: reqwest::Error) -> Self {
        Error::Transport {
            service,
            source: source.without_url(),
        }
    }

    /// Build a request error for a request `reqwest` refused to build
    /// (malformed header value, unparsable URL). Nothing was sent.
    pub fn invalid_request(service: Service, source: reqwest::Error) -> Self {
        Error::Request {
            service,
            status: 0,
            message: format!("invalid request: {}", source.without_url()),
        }
    }

    /// Build a response error.
    pub fn response(service: Service, reason: impl Into<String>) -> Self {
        Error::ProviderResponse {
            service,
            reason: reason.into(),
        }
    }

    /// The service that produced this error, if it is service-specific.
    pub fn service(&self) -> Option<Service> {
        match self {
            Error::UnsupportedProvider { .. } | Error::EmptyPrompt => None,
            Error::MissingCredential { service, .. }
            | Error::Authentication { service, .. }
            | Error::Request { service, .. }
            | Error::RateLimited { service, .. }
            | Error::Unavailable { service, .. }
            | Error::Transport { service, .. }
            | Error::ProviderResponse { service, .. } => Some(*service),
        }
    }

    /// Whether a consumer could reasonably retry the same call.
    ///
    /// This layer never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::RateLimited { .. } | Error::Unavailable { .. }
        )
    }

    /// Short, stable name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedProvider { .. } => "unsupported_provider",
            Error::MissingCredential { .. } => "missing_credential",
            Error::EmptyPrompt => "empty_prompt",
            Error::Authentication { .. } => "authentication",
            Error::Request { .. } => "request",
            Error::RateLimited { .. } => "rate_limited",
            Error::Unavailable { .. } => "unavailable",
            Error::Transport { .. } => "transport",
            Error::ProviderResponse { .. } => "provider_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_provider_message() {
        let err = Error::UnsupportedProvider {
            name: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("openai"));
        assert!(err.service().is_none());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_messages_name_the_service() {
        let err = Error::Authentication {
            service: Service::Anthropic,
            status: 401,
            message: "invalid x-api-key".to_string(),
        };
        assert!(err.to_string().starts_with("anthropic: authentication failed (401)"));
        assert_eq!(err.service(), Some(Service::Anthropic));
        assert_eq!(err.kind(), "authentication");
    }

    #[test]
    fn test_missing_credential_names_env_var() {
        let err = Error::MissingCredential {
            service: Service::OpenAi,
            env_key: "OPENAI_API_KEY",
        };
        assert_eq!(err.to_string(), "openai: missing credential (set OPENAI_API_KEY)");
    }

    #[test]
    fn test_retryable_kinds() {
        let rate = Error::RateLimited {
            service: Service::Xai,
            message: "slow down".to_string(),
        };
        let down = Error::Unavailable {
            service: Service::Google,
            status: 503,
            message: "overloaded".to_string(),
        };
        let bad = Error::Request {
            service: Service::OpenAi,
            status: 404,
            message: "model not found".to_string(),
        };
        assert!(rate.is_retryable());
        assert!(down.is_retryable());
        assert!(!bad.is_retryable());
        assert!(!Error::response(Service::OpenAi, "empty").is_retryable());
        assert!(!Error::EmptyPrompt.is_retryable());
    }
}
