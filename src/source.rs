use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::{ExtractError, Result};

/// Scanned when no path is given on the command line
pub const DEFAULT_SOURCE_PATH: &str = "src/lexer/tokens.rs";

/// Sample token enum for `--embedded` runs and tests
pub const EMBEDDED_TOKEN_ENUM: &str = r#"
#[derive(Debug)]
pub enum TokenType {
    // Keywords
    VAR,
    CONST,
    FUNC,
    FOR,
    WHILE,
    IF,
    ELSE,
    WHEN,
    USE,


    // Other keywords


    // Special character
    LCURLY,       // {
    RCURLY,       // }
    LPARENT,     // (
    RPARENT,     // )
    LSQUAREBRAC, // [
    RSQUAREBRAC, // ]
    COMMENT,     // //
    QUOTMARK,   // "
    EXCLAMMARK,
    COMMA,       // ,
    COLON,       // :

    // Identifier, literals
    IDENT,
    NUMBER,
    FALSE,
    TRUE,

    // Other
    ILLEGAL, // illegal expression
    EOL,     // End of line

    // Arithmetic operators and alike
    PLUS,        // +
    MINUS,       // -
    DIVIDE,      // /
    MULTIPLY,    // *
    ASSIGN,      // =

    EQUAL,       // ==
    NOTEQUAL,    // !=
    GREATERTHAN, // >
    LESSERTHAN,    // <
    GREATEROREQUALTHAN, // >=
    LESSEROREQUALTHAN,    // <=

    AND,
    OR,
    IN,
    ARROW, // ->
    OTHER,

    // Structures
    STRUCT,
    ENUM,
}
"#;

/// Where the scanned text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    Embedded(&'static str),
    File(PathBuf),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::File(PathBuf::from(DEFAULT_SOURCE_PATH))
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceText::Embedded(_) => write!(f, "<embedded>"),
            SourceText::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl SourceText {
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            SourceText::Embedded(text) => {
                debug!("using embedded source ({} bytes)", text.len());
                Ok(Cow::Borrowed(text))
            }
            SourceText::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| ExtractError::FileAccess {
                    path: path.clone(),
                    source,
                })?;
                debug!("read {} ({} bytes)", path.display(), text.len());
                Ok(Cow::Owned(text))
            }
        }
    }
}
