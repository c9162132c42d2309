use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No `enum {enum_name} {{ ... }}` block found")]
    PatternNotFound { enum_name: String },

    #[error("Enum {enum_name} has no entries left after filtering comments and exclusions")]
    EmptyResult { enum_name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
