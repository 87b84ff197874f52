// handlers/files/delete.rs - DELETE /api/files/:filename handler

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::app::AppState;
use crate::auth::User;
use crate::error::ApiError;

use super::FileMessage;

/// DELETE /api/files/:filename - remove the file. Admin only.
pub async fn file_delete(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(filename): Path<String>,
) -> Result<Json<FileMessage>, ApiError> {
    state.store.remove(&filename).await?;

    tracing::info!("User '{}' deleted file '{}'", user.id, filename);

    Ok(Json(FileMessage::new("File deleted successfully")))
}
