use serde::{Deserialize, Serialize};

/// One farm plot as entered by the user. Serialized as-is into the record
/// store and rendered into provider prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmRecord {
    pub plot: String,
    pub crop: String,
    pub variety: String,
    pub area_ha: f64,
    pub soil_type: String,
    pub plant_date: String,
}

/// Per-request snapshot handed to the gateway. Built once per query and
/// never mutated during dispatch.
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub lang: String,
    pub season: String,
    pub records: Vec<FarmRecord>,
}

impl QueryContext {
    pub fn new(lang: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            season: season.into(),
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<FarmRecord>) -> Self {
        self.records = records;
        self
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new("en", "rainy")
    }
}
