pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod storage;

pub use app::{app, serve, AppState};
pub use config::AppConfig;
