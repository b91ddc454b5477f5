//! Blob store inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use codevault_core::error::AppError;
use codevault_service::InventoryService;

/// Arguments for blob commands
#[derive(Debug, Args)]
pub struct BlobsArgs {
    /// Blob subcommand
    #[command(subcommand)]
    pub command: BlobsCommand,
}

/// Blob subcommands
#[derive(Debug, Subcommand)]
pub enum BlobsCommand {
    /// List every blob in the store
    List,
    /// Report blobs without records and records without blobs
    Orphans,
    /// Show backend health and counts
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct BlobRow {
    name: String,
    size: u64,
    content_type: String,
    modified: String,
}

#[derive(Debug, Serialize, Tabled)]
struct OrphanRow {
    kind: &'static str,
    stored_name: String,
}

/// Execute blob commands
pub async fn execute(
    args: &BlobsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let blobs = codevault_api::open_blob_store(&config).await?;

    match &args.command {
        BlobsCommand::List => {
            let rows: Vec<BlobRow> = blobs
                .list()
                .await?
                .into_iter()
                .map(|b| BlobRow {
                    name: b.name,
                    size: b.size_bytes,
                    content_type: b.content_type.unwrap_or_default(),
                    modified: b
                        .last_modified
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        BlobsCommand::Orphans => {
            let registry = codevault_api::open_registry(&config).await?;
            let report = InventoryService::new(registry, blobs).orphans().await?;

            if report.is_clean() && format == OutputFormat::Table {
                output::print_success("Registry and blob store are consistent.");
                return Ok(());
            }

            let rows: Vec<OrphanRow> = report
                .blobs_without_records
                .into_iter()
                .map(|stored_name| OrphanRow {
                    kind: "blob without record",
                    stored_name,
                })
                .chain(
                    report
                        .records_without_blobs
                        .into_iter()
                        .map(|stored_name| OrphanRow {
                            kind: "record without blob",
                            stored_name,
                        }),
                )
                .collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_warning("Orphans are reported only; nothing was removed.");
            }
        }
        BlobsCommand::Status => {
            let registry = codevault_api::open_registry(&config).await?;
            let status = InventoryService::new(registry, blobs).status().await;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&status)?);
                }
                OutputFormat::Table => {
                    output::print_kv("Registry backend", &status.registry_backend);
                    output::print_kv("Registry healthy", &status.registry_healthy.to_string());
                    output::print_kv("Records", &status.record_count.to_string());
                    output::print_kv("Blob backend", &status.blob_backend);
                    output::print_kv("Blob store healthy", &status.blob_healthy.to_string());
                    output::print_kv("Blobs", &status.blob_count.to_string());
                }
            }
        }
    }

    Ok(())
}
