//! paytrack library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Periods => cli::commands::periods::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides on top
    let mut cfg = Config::load();

    if let Some(bucket) = &cli.bucket {
        cfg.bucket = bucket.clone();
    }
    if let Some(key) = &cli.key {
        cfg.key = key.clone();
    }
    if let Some(anchor) = &cli.anchor {
        cfg.anchor_date = anchor.clone();
    }
    if let Some(periods) = cli.periods {
        cfg.period_count = periods;
    }

    dispatch(&cli, &cfg)
}
