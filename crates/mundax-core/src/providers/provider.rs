use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The fixed set of text-generation services the gateway fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Deepseek,
    Openai,
    Google,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::Deepseek, ProviderId::Openai, ProviderId::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Deepseek => "deepseek",
            ProviderId::Openai => "openai",
            ProviderId::Google => "google",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-2xx status. Display is exactly `HTTP <code>` so the failure
    /// result carries the status the way callers expect to see it.
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

/// Outcome of one provider call. A `Failure` never aborts sibling calls;
/// the gateway collects one of these per configured provider.
#[derive(Debug, Clone)]
pub enum ProviderResult {
    Success { provider: ProviderId, content: String },
    Failure { provider: ProviderId, error: String },
}

impl ProviderResult {
    pub fn provider(&self) -> ProviderId {
        match self {
            ProviderResult::Success { provider, .. } => *provider,
            ProviderResult::Failure { provider, .. } => *provider,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderResult::Success { .. })
    }
}

/// One external text-generation endpoint. Implementations build their own
/// wire format from the two prompt strings and normalize the reply to plain
/// text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}
