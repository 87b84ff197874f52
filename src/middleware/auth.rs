use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Admin gate for mutating file routes.
///
/// Resolves the caller through the configured identity resolver and only
/// lets the request through when the caller has the admin role. The
/// resolved user is injected into request extensions for the handler.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match state.identity.resolve(request.headers()).await {
        Some(user) => user,
        None => {
            tracing::warn!("Access denied: unknown or missing caller identity for {} {}", request.method(), request.uri());
            return Err(ApiError::access_denied());
        }
    };

    if !user.is_admin() {
        tracing::warn!("Access denied: user '{}' is not an admin ({} {})", user.id, request.method(), request.uri());
        return Err(ApiError::access_denied());
    }

    tracing::debug!("Admin access granted to user '{}' ({})", user.id, user.email);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
