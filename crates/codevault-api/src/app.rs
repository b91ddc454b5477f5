//! Application builder: wires backends, services and the router into a
//! running server.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use codevault_core::config::{AppConfig, RegistryProvider};
use codevault_core::error::{AppError, ErrorKind};
use codevault_core::result::AppResult;
use codevault_core::traits::blob::BlobStore;
use codevault_database::connection::mask_password;
use codevault_database::migration::run_migrations;
use codevault_database::{DatabasePool, FileRegistry, MemoryFileRegistry, PgFileRegistry};
use codevault_storage::LocalBlobStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Open the file registry selected by `registry.provider`.
///
/// For PostgreSQL, migrations run first when `database.auto_migrate` is set.
pub async fn open_registry(config: &AppConfig) -> AppResult<Arc<dyn FileRegistry>> {
    match config.registry.provider {
        RegistryProvider::Memory => {
            info!("Using in-memory file registry; records are lost on restart");
            Ok(Arc::new(MemoryFileRegistry::new()))
        }
        RegistryProvider::Postgres => {
            info!(
                url = %mask_password(&config.database.url),
                "Connecting to PostgreSQL file registry"
            );
            let db = DatabasePool::connect(&config.database).await?;
            if config.database.auto_migrate {
                run_migrations(db.pool()).await?;
            }
            Ok(Arc::new(PgFileRegistry::new(db.into_pool())))
        }
    }
}

/// Open the blob store rooted at `storage.blob_root`, creating it if needed.
pub async fn open_blob_store(config: &AppConfig) -> AppResult<Arc<dyn BlobStore>> {
    let store = LocalBlobStore::new(&config.storage.blob_root).await?;
    info!(root = %store.root().display(), "Blob store ready");
    Ok(Arc::new(store))
}

/// Construct the shared state from configuration.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let registry = open_registry(&config).await?;
    let blobs = open_blob_store(&config).await?;
    Ok(AppState::new(config, registry, blobs))
}

/// Runs the CodeVault server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting CodeVault server...");

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;

    info!("CodeVault server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("CodeVault server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
