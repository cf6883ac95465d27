//! Shared data-directory scaffolding for integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_DIR_ID: AtomicU32 = AtomicU32::new(0);

/// Temporary data directory removed on drop.
pub struct DataDir {
    path: Utf8PathBuf,
}

impl DataDir {
    /// Creates an empty unique directory under the system temp dir.
    pub fn new() -> Self {
        let id = NEXT_DIR_ID.fetch_add(1, Ordering::Relaxed);
        let base = std::env::temp_dir().join(format!(
            "taskdesk-test-{}-{id}",
            std::process::id()
        ));
        let path = Utf8PathBuf::from_path_buf(base).expect("temp dir path is valid UTF-8");
        fs::create_dir_all(&path).expect("create temp data dir");
        Self { path }
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Writes a file inside the directory.
    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.path.join(name), contents).expect("write seed file");
    }

    /// Reads a file inside the directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path.join(name)).expect("read data file")
    }
}

impl Drop for DataDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
