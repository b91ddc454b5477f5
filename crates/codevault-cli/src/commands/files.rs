//! File record commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use codevault_core::error::AppError;
use codevault_core::types::{AccessCode, FileId};
use codevault_entity::file::FileRecord;
use codevault_service::{DeleteService, ListingService};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FilesCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// List files uploaded under an access code
    List {
        /// Access code
        #[arg(long)]
        code: String,
    },
    /// Delete a file and its blob
    Delete {
        /// File id
        id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// File record row for table output
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    id: String,
    original_name: String,
    stored_name: String,
    size: i64,
    content_type: String,
    uploaded_at: String,
}

impl From<&FileRecord> for FileRow {
    fn from(r: &FileRecord) -> Self {
        Self {
            id: r.id.to_string(),
            original_name: r.original_name.clone(),
            stored_name: r.stored_name.clone(),
            size: r.size_bytes,
            content_type: r.content_type.clone().unwrap_or_default(),
            uploaded_at: r.uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute file commands
pub async fn execute(
    args: &FilesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let registry = codevault_api::open_registry(&config).await?;

    match &args.command {
        FilesCommand::List { code } => {
            let code = AccessCode::parse(code)?;
            let records = ListingService::new(registry).list(&code).await?;
            let rows: Vec<FileRow> = records.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
        FilesCommand::Delete { id, force } => {
            let id = FileId::parse(id)?;

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete file {id} and its blob?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let blobs = codevault_api::open_blob_store(&config).await?;
            // Operators act outside any access code.
            let mut access = config.access.clone();
            access.require_code_for_delete = false;

            let record = DeleteService::new(registry, blobs, access)
                .delete(id, None)
                .await?;
            output::print_success(&format!(
                "Deleted '{}' ({})",
                record.original_name, record.stored_name
            ));
        }
    }

    Ok(())
}
