//! Flat-file user repository.

use super::read_records;
use super::rows::UserRowCodec;
use crate::task::domain::{User, UserCode};
use crate::task::ports::UserRepository;
use camino::Utf8PathBuf;
use cap_std::fs_utf8::Dir;

/// User repository over one delimited file.
///
/// The user file is reference data: this adapter never writes it.
#[derive(Debug)]
pub struct CsvUserRepository {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl CsvUserRepository {
    /// Creates a repository reading `file_name` inside `dir`.
    #[must_use]
    pub const fn new(dir: Dir, file_name: Utf8PathBuf) -> Self {
        Self { dir, file_name }
    }
}

impl UserRepository for CsvUserRepository {
    fn find_by_code(&self, code: UserCode) -> Option<User> {
        read_records::<UserRowCodec>(&self.dir, &self.file_name)
            .into_iter()
            .find(|user| user.code() == code)
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        read_records::<UserRowCodec>(&self.dir, &self.file_name)
            .into_iter()
            .find(|user| user.email() == email && user.password() == password)
    }
}
