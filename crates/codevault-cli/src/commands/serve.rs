//! Start the CodeVault server.

use clap::Args;

use codevault_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override whether migrations run on startup
    #[arg(long)]
    pub auto_migrate: Option<bool>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(auto_migrate) = args.auto_migrate {
        config.database.auto_migrate = auto_migrate;
    }

    println!("Starting CodeVault server...");
    println!("  Host:      {}", config.server.host);
    println!("  Port:      {}", config.server.port);
    println!("  Registry:  {}", config.registry.provider);
    println!("  Blob root: {}", config.storage.blob_root);

    codevault_api::run_server(config).await
}
