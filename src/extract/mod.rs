//! Locates an enum block in source text and reports its entries.
//!
//! The block is found with a literal delimiter search (`enum <Name> {`
//! up to the first `\n}`), not by parsing: nested braces, multiple enums
//! and syntax errors are not handled.

mod block;
mod entries;

pub use block::{block_pattern, find_enum_block, EnumBlock};
pub use entries::{classify_line, filter_entries, FilterStats, LineKind};

use log::debug;
use regex::Regex;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};

/// Last entry of `enum TokenType { ... }` with the stock exclusions applied.
pub fn extract_last_entry(source_text: &str) -> Result<String> {
    Extractor::default().last_entry(source_text)
}

#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    pattern: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            pattern: block::token_type_pattern(),
            config: ExtractorConfig::default(),
        }
    }
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let pattern = block_pattern(&config.enum_name)?;
        Ok(Self { config, pattern })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn find_block<'a>(&self, text: &'a str) -> Result<EnumBlock<'a>> {
        let block = find_enum_block(&self.pattern, &self.config.enum_name, text)?;
        debug!(
            "enum {} block at bytes {}..{}",
            self.config.enum_name, block.span.start, block.span.end
        );
        Ok(block)
    }

    /// Filtered entry list, in source order
    pub fn entries(&self, text: &str) -> Result<Vec<String>> {
        let block = self.find_block(text)?;
        let (entries, stats) =
            filter_entries(block.body, &self.config.comment_prefix, &self.config.exclude);
        debug!(
            "kept {} entries, dropped {} blank, {} comment, {} excluded lines",
            stats.entries, stats.blank, stats.comments, stats.excluded
        );
        Ok(entries)
    }

    pub fn last_entry(&self, text: &str) -> Result<String> {
        let mut entries = self.entries(text)?;
        entries.pop().ok_or_else(|| ExtractError::EmptyResult {
            enum_name: self.config.enum_name.clone(),
        })
    }
}
