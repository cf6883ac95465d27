//! In-memory user repository.

use crate::task::domain::{User, UserCode};
use crate::task::ports::UserRepository;

/// Fixed-content user repository.
///
/// Users are reference data, so the content is set at construction and
/// never changes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Creates a repository holding the given users in order.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_code(&self, code: UserCode) -> Option<User> {
        self.users.iter().find(|user| user.code() == code).cloned()
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.email() == email && user.password() == password)
            .cloned()
    }
}
