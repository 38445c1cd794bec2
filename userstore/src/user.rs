use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user record. Immutable once constructed; id 0 means "not yet assigned"
/// and is replaced by the store on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Failures surfaced by a repository. Propagated unchanged up the call
/// chain; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("user {0} not found")]
    NotFound(i64),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
