// handlers/mod.rs - HTTP handlers
//
// files:   /api/files CRUD (create and delete are admin-gated by middleware)
// service: / and /health
pub mod files;
pub mod service;

pub use files::{file_create, file_delete, file_read};
pub use service::{health, root};
