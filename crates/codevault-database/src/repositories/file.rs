//! PostgreSQL file registry.

use async_trait::async_trait;
use sqlx::PgPool;

use codevault_core::error::{AppError, ErrorKind};
use codevault_core::result::AppResult;
use codevault_core::types::{AccessCode, FileId};
use codevault_entity::file::{FileRecord, NewFileRecord};

use crate::registry::FileRegistry;

/// Registry for file records stored in the `file_records` table.
#[derive(Debug, Clone)]
pub struct PgFileRegistry {
    pool: PgPool,
}

impl PgFileRegistry {
    /// Create a new registry over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error, stored_name: &str) -> AppError {
    let unique = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique {
        AppError::with_source(
            ErrorKind::Conflict,
            format!("Stored name already registered: {stored_name}"),
            e,
        )
    } else {
        AppError::with_source(ErrorKind::Database, "Failed to insert file record", e)
    }
}

#[async_trait]
impl FileRegistry for PgFileRegistry {
    fn backend_type(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO file_records (id, stored_name, original_name, access_code, content_type, size_bytes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(FileId::new())
        .bind(&record.stored_name)
        .bind(&record.original_name)
        .bind(record.access_code.as_str())
        .bind(&record.content_type)
        .bind(record.size_bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &record.stored_name))
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM file_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file record", e))
    }

    async fn find_by_access_code(&self, code: &AccessCode) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM file_records WHERE access_code = $1 \
             ORDER BY uploaded_at ASC, stored_name ASC",
        )
        .bind(code.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file records", e))
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM file_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete file record", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM file_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count file records", e)
            })?;
        Ok(total as u64)
    }

    async fn stored_names(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT stored_name FROM file_records ORDER BY stored_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list stored names", e)
            })
    }
}
