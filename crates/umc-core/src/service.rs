//! Service identifiers — the closed set of LLM vendors a caller can target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One supported LLM vendor.
///
/// Parsing is case-insensitive and ignores surrounding whitespace, so
/// `"OpenAI"`, `"openai"` and `" OPENAI "` all resolve to [`Service::OpenAi`].
/// Anything else is rejected with [`Error::UnsupportedProvider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Service {
    Aristote,
    Google,
    Anthropic,
    #[serde(rename = "openai")]
    OpenAi,
    Xai,
}

impl Service {
    /// Every supported service, in display order.
    pub const ALL: [Service; 5] = [
        Service::Aristote,
        Service::Google,
        Service::Anthropic,
        Service::OpenAi,
        Service::Xai,
    ];

    /// Canonical lowercase name (`"openai"`, `"xai"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Aristote => "aristote",
            Service::Google => "google",
            Service::Anthropic => "anthropic",
            Service::OpenAi => "openai",
            Service::Xai => "xai",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Service::ALL
            .into_iter()
            .find(|svc| svc.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedProvider {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Service {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
