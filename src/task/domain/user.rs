//! User reference data loaded from the user file.

use super::UserCode;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Users are reference data: they are read from the user file and never
/// created, updated, or deleted by this crate. Credentials are held in
/// plain text, matching the file format this tool consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    code: UserCode,
    name: String,
    email: String,
    password: String,
}

impl User {
    /// Creates a user record from its stored fields.
    #[must_use]
    pub const fn new(code: UserCode, name: String, email: String, password: String) -> Self {
        Self {
            code,
            name,
            email,
            password,
        }
    }

    /// Returns the user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the login email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the login password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}
