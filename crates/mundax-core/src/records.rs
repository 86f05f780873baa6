//! JSON-file-backed store for farm plot records. Every operation reads the
//! whole file and writes it back; saves are explicit and strictly sequential.

use crate::context::FarmRecord;
use anyhow::Result;
use std::path::PathBuf;

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mundax")
            .join("records.json")
    }

    pub fn load(&self) -> Result<Vec<FarmRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn add(&self, record: FarmRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.write(&records)
    }

    /// Remove the record at `index` (as shown by `load` order). Returns
    /// whether anything was removed.
    pub fn delete(&self, index: usize) -> Result<bool> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Ok(false);
        }
        records.remove(index);
        self.write(&records)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Pretty JSON of every record, for backup/sharing.
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.load()?)?)
    }

    fn write(&self, records: &[FarmRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
