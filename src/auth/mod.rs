use std::path::Path;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Built-in demonstration users
static DEFAULT_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        },
        User {
            id: "2".to_string(),
            email: "user@example.com".to_string(),
            role: Role::User,
        },
    ]
});

#[derive(Debug, Error)]
pub enum UserTableError {
    #[error("failed to read user table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid user table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed in-memory user table. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Load a JSON array of users, e.g.
    /// `[{"id": "1", "email": "admin@example.com", "role": "admin"}]`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, UserTableError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| UserTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let users: Vec<User> = serde_json::from_str(&raw).map_err(|source| UserTableError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(users))
    }

    /// Exact match on user id
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new(DEFAULT_USERS.clone())
    }
}

/// Resolves the caller of a request to a known user.
///
/// The access guard only consults this trait, so the header lookup below can
/// be swapped for a real authentication scheme without touching handlers.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Option<User>;
}

/// Trusts a caller-supplied user id header outright. The header is unsigned,
/// so this is a placeholder and not a security boundary.
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: HeaderName,
    users: UserTable,
}

impl HeaderIdentity {
    pub fn new(header: HeaderName, users: UserTable) -> Self {
        Self { header, users }
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

#[async_trait]
impl IdentityResolver for HeaderIdentity {
    async fn resolve(&self, headers: &HeaderMap) -> Option<User> {
        let user_id = headers.get(&self.header)?.to_str().ok()?;
        self.users.find(user_id).cloned()
    }
}
