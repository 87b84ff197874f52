//! Local-disk file storage rooted at a configurable directory.
//!
//! Files live directly under `<root>/logs`. A sibling `<root>/backup` is
//! provisioned at startup but never read or written.

use std::io;
use std::path::{is_separator, Path, PathBuf};

use futures::future::join_all;
use thiserror::Error;

pub const LOGS_DIR: &str = "logs";
pub const BACKUP_DIR: &str = "backup";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileStore {
    logs_dir: PathBuf,
    backup_dir: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            logs_dir: root.join(LOGS_DIR),
            backup_dir: root.join(BACKUP_DIR),
        }
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Create the logs and backup directories (with parents) if absent.
    ///
    /// Both directories are attempted concurrently and every failure is
    /// logged. With `fail_fast` unset the failures are swallowed and later
    /// file operations fail on their own; with it set the first failure is
    /// returned.
    pub async fn initialize(&self, fail_fast: bool) -> Result<(), StorageError> {
        let dirs = [self.logs_dir.clone(), self.backup_dir.clone()];

        let results = join_all(dirs.into_iter().map(|path| async move {
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|source| StorageError::CreateDir { path, source })
        }))
        .await;

        let mut first_error = None;
        for result in results {
            match result {
                Ok(()) => {}
                Err(e) => {
                    tracing::error!("Error creating storage directory: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) if fail_fast => Err(e),
            _ => {
                tracing::debug!("Storage initialized at {}", self.logs_dir.display());
                Ok(())
            }
        }
    }

    /// Path of `filename` inside the logs directory.
    ///
    /// The name is used verbatim as the final segment: separators and `..`
    /// inside it are not rejected. Only leading separators are stripped so an
    /// absolute name is appended rather than replacing the logs path.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.logs_dir.join(filename.trim_start_matches(is_separator))
    }

    /// Write `content` as the full contents of `filename`, creating or
    /// truncating it.
    pub async fn write(&self, filename: &str, content: &str) -> Result<(), StorageError> {
        let path = self.resolve(filename);
        match tokio::fs::write(&path, content.as_bytes()).await {
            Ok(()) => Ok(()),
            Err(source) => Err(StorageError::Write { path, source }),
        }
    }

    /// Read `filename` as text. Invalid UTF-8 sequences are replaced rather
    /// than failing the read.
    pub async fn read(&self, filename: &str) -> Result<String, StorageError> {
        let path = self.resolve(filename);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    pub async fn remove(&self, filename: &str) -> Result<(), StorageError> {
        let path = self.resolve(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(source) => Err(StorageError::Remove { path, source }),
        }
    }

    /// Whether the logs directory currently exists as a directory
    pub async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.logs_dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}
