use std::collections::HashMap;
use std::sync::Mutex;

use crate::user::{RepoError, User};

/// Capability interface for user storage. Implementations are chosen at
/// construction time: the in-memory store below, or the recording mock in
/// [`crate::mock`].
pub trait UserRepository {
    fn fetch(&self, id: i64) -> Result<User, RepoError>;

    /// Persists a record and returns it as stored. A record with id 0 gets
    /// the next free id assigned.
    fn save(&self, user: User) -> Result<User, RepoError>;

    fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// All records, ordered by id.
    fn list_all(&self) -> Result<Vec<User>, RepoError>;
}

/// Map-backed store. Thread-safe so the HTTP chapter can share one instance
/// across handlers.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    users: Mutex<HashMap<i64, User>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(seed: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        let mut users = repo.users.lock().unwrap();
        for user in seed {
            users.insert(user.id, user);
        }
        drop(users);
        repo
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryRepository {
    fn fetch(&self, id: i64) -> Result<User, RepoError> {
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn save(&self, mut user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if user.id == 0 {
            user.id = users.keys().max().copied().unwrap_or(0) + 1;
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }

    fn list_all(&self) -> Result<Vec<User>, RepoError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }
}
