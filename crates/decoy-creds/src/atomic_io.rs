//! Atomic file replacement for `--out`.
//!
//! Output files are written to a hidden temporary sibling, synced, and then
//! renamed over the target, so a failed run never leaves a truncated file
//! behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::OutputError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single normal path component.
///
/// # Errors
///
/// Returns [`OutputError::WriteError`] if the file cannot be written. The
/// temporary sibling is removed on failure.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(write_error(file_name, "output path must be a file".to_owned()));
    };

    let tmp_name = temp_name_for(target);
    let staged = stage(dir, &tmp_name, contents).and_then(|()| replace(dir, &tmp_name, target));
    if let Err(err) = staged {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(file_name, err.to_string()));
    }

    // Best-effort directory sync.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn temp_name_for(target: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_error(path: &Utf8Path, message: String) -> OutputError {
    OutputError::WriteError {
        path: path.to_path_buf(),
        message,
    }
}

fn stage(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}
