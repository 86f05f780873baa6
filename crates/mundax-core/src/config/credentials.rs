use crate::providers::ProviderId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keys must be longer than this to count as configured; real tokens for all
/// three services are well past it.
const MIN_KEY_LEN: usize = 20;
/// Marker left behind by docs and templates ("YOUR_KEY_HERE" and friends).
const PLACEHOLDER_MARKER: &str = "YOUR_";

/// One bearer token per provider. Loaded once at startup, held for the
/// session, and only rewritten through an explicit [`ApiKeys::save`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default)]
    pub deepseek: String,
    #[serde(default)]
    pub openai: String,
    #[serde(default)]
    pub google: String,
}

impl ApiKeys {
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mundax")
            .join("credentials.json")
    }

    /// Load from disk, then fill any missing key from the environment
    /// (`MUNDAX_DEEPSEEK_API_KEY`, `MUNDAX_OPENAI_API_KEY`,
    /// `MUNDAX_GOOGLE_API_KEY`). There are no baked-in fallback keys.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        let mut keys = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str::<ApiKeys>(&data)?
        } else {
            ApiKeys::default()
        };

        if keys.deepseek.is_empty() {
            keys.deepseek = std::env::var("MUNDAX_DEEPSEEK_API_KEY").unwrap_or_default();
        }
        if keys.openai.is_empty() {
            keys.openai = std::env::var("MUNDAX_OPENAI_API_KEY").unwrap_or_default();
        }
        if keys.google.is_empty() {
            keys.google = std::env::var("MUNDAX_GOOGLE_API_KEY").unwrap_or_default();
        }

        Ok(keys)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, data)?;
        Ok(())
    }

    pub fn get(&self, provider: ProviderId) -> &str {
        match provider {
            ProviderId::Deepseek => &self.deepseek,
            ProviderId::Openai => &self.openai,
            ProviderId::Google => &self.google,
        }
    }

    /// Configured means every provider has a plausible token: present, past
    /// the minimum length, and not a template placeholder. Checked once
    /// before dispatch; a failed check short-circuits all network calls.
    pub fn is_configured(&self) -> bool {
        ProviderId::ALL.iter().all(|p| key_ok(self.get(*p)))
    }
}

fn key_ok(key: &str) -> bool {
    key.len() > MIN_KEY_LEN && !key.contains(PLACEHOLDER_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plausible() -> String {
        "sk-0123456789abcdef0123456789".to_string()
    }

    #[test]
    fn all_plausible_keys_is_configured() {
        let keys = ApiKeys {
            deepseek: plausible(),
            openai: plausible(),
            google: plausible(),
        };
        assert!(keys.is_configured());
    }

    #[test]
    fn missing_key_is_not_configured() {
        let keys = ApiKeys {
            deepseek: plausible(),
            openai: String::new(),
            google: plausible(),
        };
        assert!(!keys.is_configured());
    }

    #[test]
    fn short_key_is_not_configured() {
        let keys = ApiKeys {
            deepseek: "sk-short".to_string(),
            openai: plausible(),
            google: plausible(),
        };
        assert!(!keys.is_configured());
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        let keys = ApiKeys {
            deepseek: plausible(),
            openai: "YOUR_OPENAI_KEY_GOES_RIGHT_HERE".to_string(),
            google: plausible(),
        };
        assert!(!keys.is_configured());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let keys: ApiKeys = serde_json::from_str(r#"{"openai":"abc"}"#).unwrap();
        assert_eq!(keys.openai, "abc");
        assert!(keys.deepseek.is_empty());
        assert!(!keys.is_configured());
    }
}
