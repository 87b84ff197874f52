// handlers/files/create.rs - POST /api/files handler

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::auth::User;
use crate::error::ApiError;

use super::FileMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRequest {
    pub filename: String,
    pub content: String,
}

/// POST /api/files - write `content` to `logs/<filename>`, replacing any
/// previous contents. Admin only.
pub async fn file_create(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    body: Result<Json<CreateFileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FileMessage>), ApiError> {
    let Json(request) = body?;

    state.store.write(&request.filename, &request.content).await?;

    tracing::info!(
        "User '{}' saved file '{}' ({} bytes)",
        user.id,
        request.filename,
        request.content.len()
    );

    Ok((StatusCode::CREATED, Json(FileMessage::new("File saved successfully"))))
}
