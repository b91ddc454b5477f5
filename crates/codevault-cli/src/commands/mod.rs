//! CLI command definitions and dispatch.

pub mod blobs;
pub mod files;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use codevault_core::config::AppConfig;
use codevault_core::error::AppError;

/// CodeVault: access-code file sharing
#[derive(Debug, Parser)]
#[command(name = "codevault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the CodeVault server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Inspect and delete file records
    Files(files::FilesArgs),
    /// Inspect the blob store
    Blobs(blobs::BlobsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Files(args) => files::execute(args, &self.config, self.format).await,
            Commands::Blobs(args) => blobs::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration, using `CODEVAULT_ENV` for the overlay.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("CODEVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(config_path, &env)
}
