//! Extractor configuration.
//!
//! Defaults reproduce the stock behavior: `enum TokenType { ... }`, line
//! comments starting with `//`, and `LCURLY,` / `RCURLY,` excluded.
//! A TOML file may override any field:
//!
//! ```toml
//! enum_name = "Keyword"
//! exclude = ["EOF,"]
//! comment_prefix = "#"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ExtractError, Result};

pub const DEFAULT_ENUM_NAME: &str = "TokenType";
pub const DEFAULT_COMMENT_PREFIX: &str = "//";
pub const DEFAULT_EXCLUDE: [&str; 2] = ["LCURLY,", "RCURLY,"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Name following the `enum` keyword
    pub enum_name: String,
    /// Trimmed entry lines dropped verbatim
    pub exclude: Vec<String>,
    /// Trimmed lines starting with this are treated as comments
    pub comment_prefix: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ExtractError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.enum_name.trim().is_empty() {
            return Err(ExtractError::Config("enum_name must not be empty".into()));
        }
        if self.comment_prefix.is_empty() {
            return Err(ExtractError::Config(
                "comment_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
