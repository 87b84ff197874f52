//! Router construction and server startup.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{HeaderIdentity, IdentityResolver, UserTable};
use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::require_admin;
use crate::storage::FileStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FileStore>,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(store: FileStore, identity: impl IdentityResolver + 'static) -> Self {
        Self {
            store: Arc::new(store),
            identity: Arc::new(identity),
        }
    }

    /// Prepare storage and the user table described by `config`.
    ///
    /// Storage directory failures only abort when `storage.fail_fast` is
    /// set; an unreadable users file or a bad identity header name always
    /// does.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let store = FileStore::new(&config.storage.root);
        store
            .initialize(config.storage.fail_fast)
            .await
            .context("failed to initialize storage")?;

        let users = match &config.security.users_file {
            Some(path) => UserTable::from_file(path)?,
            None => UserTable::default(),
        };
        tracing::info!("Loaded {} users", users.len());

        let header = HeaderName::try_from(config.security.identity_header.as_str())
            .with_context(|| format!("invalid identity header name '{}'", config.security.identity_header))?;

        Ok(Self::new(store, HeaderIdentity::new(header, users)))
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(file_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    // Global middleware
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn file_routes(state: AppState) -> Router<AppState> {
    let admin_only = middleware::from_fn_with_state(state, require_admin);

    Router::new()
        .route(
            "/api/files",
            post(handlers::file_create).route_layer(admin_only.clone()),
        )
        .route(
            "/api/files/:filename",
            get(handlers::file_read).merge(delete(handlers::file_delete).route_layer(admin_only)),
        )
}

/// Bind the configured address and serve until Ctrl-C / SIGTERM.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config).await?;
    let router = app(state, &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server is running on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
