use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User preferences persisted between sessions (language tag and season).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_season")]
    pub season: String,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_season() -> String {
    "rainy".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            season: default_season(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mundax")
            .join("settings.json")
    }

    pub fn load() -> Result<Self> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
