use clap::Parser;
use std::path::PathBuf;

use crate::source::DEFAULT_SOURCE_PATH;

#[derive(Parser, Debug)]
#[command(name = "lastentry")]
#[command(author, version, about = "Report the last entry of a token enum", long_about = None)]
pub struct Args {
    /// Source file containing the enum
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    pub path: PathBuf,

    /// Scan the built-in sample enum instead of a file
    #[arg(long, conflicts_with = "path")]
    pub embedded: bool,

    /// TOML file overriding enum name, exclusions, and comment prefix
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enum to look for
    #[arg(long, value_name = "NAME")]
    pub enum_name: Option<String>,

    /// Entry line to drop verbatim; replaces the default set (repeatable)
    #[arg(long = "exclude", value_name = "ENTRY")]
    pub exclude: Vec<String>,

    /// Print every filtered entry before the summary line
    #[arg(short, long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "all")]
    pub json: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
