//! Local filesystem blob store: one file per blob in a single directory.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::debug;

use codevault_core::error::{AppError, ErrorKind};
use codevault_core::result::AppResult;
use codevault_core::traits::blob::{BlobMeta, BlobStore, ByteStream};

use crate::mime::mime_from_name;
use crate::naming::is_valid_stored_name;

/// Blob store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Directory holding every blob.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new store rooted at `root_path`, creating the directory if
    /// it does not exist yet.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The directory blobs are stored in.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve a blob name to its path, refusing anything that is not a
    /// single safe path component.
    fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        if !is_valid_stored_name(name) {
            return Err(AppError::not_found(format!("Blob not found: {name}")));
        }
        Ok(self.root.join(name))
    }
}

fn not_found_or_storage(e: std::io::Error, action: &str, name: &str) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("Blob not found: {name}"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action}: {name}"), e)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn backend_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match fs::metadata(&self.root).await {
            Ok(meta) => Ok(meta.is_dir() && !meta.permissions().readonly()),
            Err(_) => Ok(false),
        }
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        let path = self.resolve(name).map_err(|_| {
            AppError::storage(format!("Refusing to write blob with unsafe name: {name}"))
        })?;

        // Never truncate an existing blob.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    AppError::with_source(
                        ErrorKind::Conflict,
                        format!("Blob already exists: {name}"),
                        e,
                    )
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create blob: {name}"),
                        e,
                    )
                }
            })?;

        let written = async {
            file.write_all(&data).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {name}"),
                e,
            ));
        }

        debug!(name, bytes = data.len(), "Wrote blob");
        Ok(())
    }

    async fn read(&self, name: &str) -> AppResult<ByteStream> {
        let path = self.resolve(name)?;
        let file = fs::File::open(&path)
            .await
            .map_err(|e| not_found_or_storage(e, "open blob", name))?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(Bytes::from))))
    }

    async fn read_bytes(&self, name: &str) -> AppResult<Bytes> {
        let path = self.resolve(name)?;
        let data = fs::read(&path)
            .await
            .map_err(|e| not_found_or_storage(e, "read blob", name))?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, name: &str) -> AppResult<bool> {
        let path = match self.resolve(name) {
            Ok(path) => path,
            Err(_) => return Ok(false),
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(name, "Deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {name}"),
                e,
            )),
        }
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        let Ok(path) = self.resolve(name) else {
            return Ok(false);
        };
        fs::try_exists(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to check blob: {name}"),
                e,
            )
        })
    }

    async fn metadata(&self, name: &str) -> AppResult<BlobMeta> {
        let path = self.resolve(name)?;
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| not_found_or_storage(e, "stat blob", name))?;

        if !meta.is_file() {
            return Err(AppError::not_found(format!("Blob not found: {name}")));
        }

        Ok(BlobMeta {
            name: name.to_string(),
            size_bytes: meta.len(),
            content_type: mime_from_name(name),
            last_modified: meta.modified().ok().map(chrono::DateTime::<chrono::Utc>::from),
        })
    }

    async fn list(&self) -> AppResult<Vec<BlobMeta>> {
        let mut dir = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to list blob root", e)
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let meta = entry.metadata().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
            })?;
            if !meta.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            entries.push(BlobMeta {
                content_type: mime_from_name(&name),
                size_bytes: meta.len(),
                last_modified: meta.modified().ok().map(chrono::DateTime::<chrono::Utc>::from),
                name,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, LocalBlobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_write_read_delete() {
        let (_dir, store) = store().await;

        let data = Bytes::from("hello world");
        store.write("1-abcd-file.txt", data.clone()).await.unwrap();
        assert!(store.exists("1-abcd-file.txt").await.unwrap());

        let read_back = store.read_bytes("1-abcd-file.txt").await.unwrap();
        assert_eq!(read_back, data);

        assert!(store.delete("1-abcd-file.txt").await.unwrap());
        assert!(!store.exists("1-abcd-file.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_never_overwrites_existing_blob() {
        let (_dir, store) = store().await;
        store.write("1-aaaa-a.txt", Bytes::from("first")).await.unwrap();

        let err = store
            .write("1-aaaa-a.txt", Bytes::from("second"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let content = store.read_bytes("1-aaaa-a.txt").await.unwrap();
        assert_eq!(content, Bytes::from("first"));
    }

    #[tokio::test]
    async fn test_stream_read() {
        let (_dir, store) = store().await;
        store.write("streamed.bin", Bytes::from(vec![7u8; 10_000])).await.unwrap();

        let mut stream = store.read("streamed.bin").await.unwrap();
        let mut total = 0;
        while let Some(chunk) = stream.next().await {
            total += chunk.unwrap().len();
        }
        assert_eq!(total, 10_000);
    }

    #[tokio::test]
    async fn test_delete_missing_is_tolerated() {
        let (_dir, store) = store().await;
        assert!(!store.delete("never-written.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_blob_is_not_found() {
        let (_dir, store) = store().await;
        let err = store.read_bytes("missing.txt").await.unwrap_err();
        assert!(err.is_not_found());
        let err = store.metadata("missing.txt").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_traversal_names_are_refused() {
        let (dir, store) = store().await;
        tokio::fs::write(dir.path().join("inside.txt"), b"x").await.unwrap();

        assert!(store.read_bytes("../inside.txt").await.unwrap_err().is_not_found());
        assert!(!store.exists("../../etc/passwd").await.unwrap());
        assert!(!store.delete("..").await.unwrap());
        let err = store.write("../escape.txt", Bytes::from("x")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
    }

    #[tokio::test]
    async fn test_list_and_metadata() {
        let (dir, store) = store().await;
        store.write("b.txt", Bytes::from("bb")).await.unwrap();
        store.write("a.png", Bytes::from("a")).await.unwrap();
        tokio::fs::create_dir(dir.path().join("subdir")).await.unwrap();

        let entries = store.list().await.unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.txt"]);
        assert_eq!(entries[1].size_bytes, 2);

        let meta = store.metadata("a.png").await.unwrap();
        assert_eq!(meta.content_type.as_deref(), Some("image/png"));
        assert!(store.health_check().await.unwrap());
    }
}
