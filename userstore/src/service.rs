use tracing::debug;

use crate::repo::UserRepository;
use crate::user::{RepoError, User};

/// Pass-through orchestration over a borrowed repository. Holds no state of
/// its own; every operation is one or two repository calls plus field
/// projection.
pub struct UserService<'a, R: UserRepository> {
    repo: &'a R,
}

impl<'a, R: UserRepository> UserService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        UserService { repo }
    }

    pub fn get_user_name(&self, id: i64) -> Result<String, RepoError> {
        let user = self.repo.fetch(id)?;
        Ok(user.name)
    }

    pub fn create_user(&self, name: &str, email: Option<&str>) -> Result<User, RepoError> {
        debug!(name, "creating user");
        let user = User {
            id: 0,
            name: name.to_owned(),
            email: email.map(str::to_owned),
        };
        self.repo.save(user)
    }

    pub fn remove_user(&self, id: i64) -> Result<(), RepoError> {
        debug!(id, "removing user");
        self.repo.delete(id)
    }

    pub fn all_user_names(&self) -> Result<Vec<String>, RepoError> {
        let users = self.repo.list_all()?;
        Ok(users.into_iter().map(|user| user.name).collect())
    }
}
