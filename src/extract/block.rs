use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

use crate::config::DEFAULT_ENUM_NAME;
use crate::error::{ExtractError, Result};

/// `enum TokenType {` up to the first newline immediately followed by `}`.
/// The lazy `*?` keeps the match to the shortest such span.
static TOKEN_TYPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"enum TokenType \{([\s\S]*?)\n\}").unwrap());

/// Text between an enum's opening brace and its closing `\n}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBlock<'a> {
    pub body: &'a str,
    /// Byte range of `body` within the scanned text
    pub span: Range<usize>,
}

pub(crate) fn token_type_pattern() -> Regex {
    TOKEN_TYPE_PATTERN.clone()
}

pub fn block_pattern(enum_name: &str) -> Result<Regex> {
    if enum_name == DEFAULT_ENUM_NAME {
        return Ok(token_type_pattern());
    }

    let pattern = format!(r"enum {} \{{([\s\S]*?)\n\}}", regex::escape(enum_name));
    Regex::new(&pattern).map_err(|e| ExtractError::Config(e.to_string()))
}

pub fn find_enum_block<'a>(
    pattern: &Regex,
    enum_name: &str,
    text: &'a str,
) -> Result<EnumBlock<'a>> {
    let body = pattern
        .captures(text)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| ExtractError::PatternNotFound {
            enum_name: enum_name.to_string(),
        })?;

    Ok(EnumBlock {
        body: body.as_str(),
        span: body.range(),
    })
}
