// handlers/files/read.rs - GET /api/files/:filename handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;

use super::FileContent;

/// GET /api/files/:filename - return the file's text content. Open to any
/// caller; every read failure is reported as not found.
pub async fn file_read(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<FileContent>, ApiError> {
    let content = state.store.read(&filename).await?;
    Ok(Json(FileContent { content }))
}
