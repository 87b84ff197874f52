pub mod file;
pub mod server;

pub use file::{get, put, rm};
pub use server::health;
