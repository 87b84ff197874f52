// handlers/files/mod.rs - File endpoints under /api/files
//
// create and delete sit behind the admin middleware; read is open.

pub mod create;
pub mod delete;
pub mod read;

pub use create::{file_create, CreateFileRequest};
pub use delete::file_delete;
pub use read::file_read;

use serde::{Deserialize, Serialize};

/// Acknowledgement body for mutating file operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMessage {
    pub message: String,
}

impl FileMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned by a successful read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}
