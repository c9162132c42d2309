use clap::Parser;
use console::style;
use std::process;

use lastentry::cli::{run, Args};

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        process::exit(1);
    }
}
