use anyhow::{Context, Result};
use log::{debug, info};

use super::Args;
use crate::config::ExtractorConfig;
use crate::emit::{format_all_entries, format_last_entry, JsonOutput};
use crate::error::ExtractError;
use crate::extract::Extractor;
use crate::source::{SourceText, EMBEDDED_TOKEN_ENUM};

/// Defaults, then the config file, then command-line flags
pub fn resolve_config(args: &Args) -> Result<ExtractorConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    if let Some(name) = &args.enum_name {
        config.enum_name = name.clone();
    }
    if !args.exclude.is_empty() {
        config.exclude = args.exclude.clone();
    }

    Ok(config)
}

pub fn resolve_source(args: &Args) -> SourceText {
    if args.embedded {
        SourceText::Embedded(EMBEDDED_TOKEN_ENUM)
    } else {
        SourceText::File(args.path.clone())
    }
}

/// Output text for one run; nothing is printed on failure
pub fn render(args: &Args) -> Result<String> {
    let config = resolve_config(args)?;
    if !config.is_default() {
        debug!("config: {:?}", config);
    }
    let extractor = Extractor::new(config)?;

    let source = resolve_source(args);
    info!("scanning {} for enum {}", source, extractor.config().enum_name);
    let text = source.load()?;

    let entries = extractor
        .entries(&text)
        .with_context(|| format!("Failed to extract entries from {}", source))?;
    let last_entry = entries
        .last()
        .cloned()
        .ok_or_else(|| ExtractError::EmptyResult {
            enum_name: extractor.config().enum_name.clone(),
        })
        .with_context(|| format!("Failed to extract entries from {}", source))?;

    let output = if args.json {
        JsonOutput::new(
            source.to_string(),
            extractor.config().enum_name.clone(),
            entries,
            last_entry,
        )
        .to_json()
    } else if args.all {
        format_all_entries(&entries, &last_entry)
    } else {
        format_last_entry(&last_entry)
    };

    Ok(output)
}

pub fn run(args: &Args) -> Result<()> {
    let output = render(args)?;
    println!("{}", output);
    Ok(())
}
