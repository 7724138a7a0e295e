mod cli;
mod commands;
mod config;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warnings unless RUST_LOG overrides.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("procgrep_cli=warn,procgrep_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::load(args.config.as_deref().map(Path::new));

    match args.command {
        Command::Search {
            process,
            pattern,
            hex,
            limit,
            window_size,
            json,
        } => commands::search::run(
            &process,
            &pattern,
            hex,
            limit,
            window_size,
            json,
            &config,
        ),
        Command::Read {
            process,
            position,
            count,
            raw,
        } => commands::read::run(&process, &position, &count, raw),
        Command::Regions { process, json } => commands::regions::run(&process, json),
    }
}
