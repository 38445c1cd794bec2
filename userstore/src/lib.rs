// Support crate for the testing catalogue: the user domain that the mocking
// and HTTP chapters share, and the expectation-matching engine behind the
// recording mocks.

pub mod mock;
mod repo;
mod service;
mod user;

pub use repo::{InMemoryRepository, UserRepository};
pub use service::UserService;
pub use user::{RepoError, User};
