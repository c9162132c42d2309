mod args;
mod run;

pub use args::Args;
pub use run::{render, resolve_config, resolve_source, run};
