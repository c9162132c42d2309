use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub enum_name: String,
    pub entries: Vec<String>,
    pub last_entry: String,
}

impl JsonOutput {
    pub fn new(
        source: String,
        enum_name: String,
        entries: Vec<String>,
        last_entry: String,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source,
            enum_name,
            entries,
            last_entry,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
