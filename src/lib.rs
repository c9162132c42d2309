//! Reports the last entry of a token enum declared in a source file.
//!
//! ```
//! let source = "pub enum TokenType {\n    VAR,\n    // comment\n    ENUM,\n}\n";
//! assert_eq!(lastentry::extract_last_entry(source).unwrap(), "ENUM,");
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod source;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extract::{extract_last_entry, Extractor};
pub use source::{SourceText, DEFAULT_SOURCE_PATH, EMBEDDED_TOKEN_ENUM};
