//! Console entry point for the taskdesk flat-file task tracker.
//!
//! Usage:
//!
//! ```text
//! taskdesk [config-path]
//! ```
//!
//! The optional JSON document at `config-path` selects the data directory
//! and file names; without it the stock `data/` layout is used. The binary
//! authenticates against the user file, then serves the task menu on
//! standard input and output. Adapter diagnostics go to standard error.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;
use std::env;
use std::io;
use std::sync::Arc;
use taskdesk::config::StorageConfig;
use taskdesk::console::Console;
use taskdesk::task::adapters::csv::{
    CsvStatusLogRepository, CsvTaskRepository, CsvUserRepository,
};
use taskdesk::task::services::TaskService;
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while interpreting the command line.
#[derive(Debug, Error)]
enum ArgsError {
    #[error("argument is not valid UTF-8")]
    NotUtf8,
    #[error("unexpected extra argument: {0}")]
    ExtraArgument(String),
}

fn main() -> Result<(), BoxError> {
    init_diagnostics();
    let config = load_config()?;
    std::fs::create_dir_all(config.data_dir.as_std_path())?;
    let dir = Dir::open_ambient_dir(&config.data_dir, ambient_authority())?;

    let users = Arc::new(CsvUserRepository::new(
        dir.try_clone()?,
        config.users_file.clone(),
    ));
    let tasks = Arc::new(CsvTaskRepository::new(
        dir.try_clone()?,
        config.tasks_file.clone(),
        Arc::clone(&users),
    ));
    let logs = Arc::new(CsvStatusLogRepository::new(dir, config.logs_file.clone()));
    let service = TaskService::new(tasks, logs, Arc::clone(&users), Arc::new(DefaultClock));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&service, users.as_ref())?;
    Ok(())
}

/// Routes adapter diagnostics to stderr, defaulting to warnings.
fn init_diagnostics() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// Reads the optional config-path argument.
fn load_config() -> Result<StorageConfig, BoxError> {
    let mut args = env::args_os().skip(1);
    let Some(first) = args.next() else {
        return Ok(StorageConfig::default());
    };
    let path = first.into_string().map_err(|_| ArgsError::NotUtf8)?;
    if let Some(extra) = args.next() {
        return Err(ArgsError::ExtraArgument(extra.to_string_lossy().into_owned()).into());
    }
    Ok(StorageConfig::load(Utf8Path::new(&path))?)
}
