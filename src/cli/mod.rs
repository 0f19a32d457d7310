//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for postfetch using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// postfetch - concurrent fetch-validate-persist pipeline
#[derive(Parser, Debug)]
#[command(name = "postfetch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "postfetch.toml", env = "POSTFETCH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "POSTFETCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a batch of posts and persist them to the configured sinks
    Fetch(commands::fetch::FetchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
