//! Flat-file adapters for the storage ports.
//!
//! Every store operation opens its backing file inside a capability-scoped
//! data directory, performs a full scan or a full rewrite, and closes it
//! again: no persistent handle, no cache, no locking. Two concurrent
//! writers can lose each other's updates through the last rewrite winning;
//! that is an accepted limitation of the single-process, single-user scope.
//! I/O failures are logged to the diagnostic stream and degrade to an empty
//! read or a no-op write, so callers observe absence rather than an error.

pub(crate) mod rows;

mod log;
mod task;
mod user;

pub use log::CsvStatusLogRepository;
pub use task::CsvTaskRepository;
pub use user::CsvUserRepository;

use camino::Utf8Path;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use rows::RowCodec;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tracing::warn;

/// Reads and decodes every record line of a backing file.
///
/// The first line is the header and is always skipped. Malformed rows are
/// skipped silently. An unreadable file yields whatever was decoded before
/// the failure, which is an empty list when the file cannot be opened at
/// all.
fn read_records<C: RowCodec>(dir: &Dir, file_name: &Utf8Path) -> Vec<C::Record> {
    let file = match dir.open(file_name) {
        Ok(file) => file,
        Err(err) => {
            warn!(file = %file_name, error = %err, "failed to open data file for reading");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut lines = BufReader::new(file).lines();
    if let Some(Err(err)) = lines.next() {
        warn!(file = %file_name, error = %err, "failed to read data file header");
        return records;
    }
    for read in lines {
        match read {
            Ok(row) => {
                if let Some(record) = C::decode(&row) {
                    records.push(record);
                }
            }
            Err(err) => {
                warn!(file = %file_name, error = %err, "failed to read data file row");
                break;
            }
        }
    }
    records
}

/// Appends one encoded record, writing the header first when the file is
/// missing or empty.
fn append_record<C: RowCodec>(dir: &Dir, file_name: &Utf8Path, record: &C::Record) {
    if let Err(err) = try_append::<C>(dir, file_name, record) {
        warn!(file = %file_name, error = %err, "failed to append record to data file");
    }
}

fn try_append<C: RowCodec>(dir: &Dir, file_name: &Utf8Path, record: &C::Record) -> io::Result<()> {
    let needs_header = dir
        .metadata(file_name)
        .map_or(true, |metadata| metadata.len() == 0);
    let file = dir.open_with(file_name, OpenOptions::new().append(true).create(true))?;
    let mut writer = BufWriter::new(file);
    if needs_header {
        writeln!(writer, "{}", C::HEADER)?;
    }
    writeln!(writer, "{}", C::encode(record))?;
    writer.flush()
}

/// Rewrites the whole backing file as the header followed by `records`.
///
/// The rewrite is not atomic: a crash mid-rewrite can leave the file
/// truncated. Accepted risk of the flat-file design.
fn rewrite_records<C: RowCodec>(dir: &Dir, file_name: &Utf8Path, records: &[C::Record]) {
    if let Err(err) = try_rewrite::<C>(dir, file_name, records) {
        warn!(file = %file_name, error = %err, "failed to rewrite data file");
    }
}

fn try_rewrite<C: RowCodec>(
    dir: &Dir,
    file_name: &Utf8Path,
    records: &[C::Record],
) -> io::Result<()> {
    let file = dir.create(file_name)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", C::HEADER)?;
    for record in records {
        writeln!(writer, "{}", C::encode(record))?;
    }
    writer.flush()
}
