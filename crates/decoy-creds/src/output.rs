//! Output destinations.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;

/// Where rendered text is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// The caller-supplied writer, normally standard output.
    #[default]
    Stdout,
    /// A file replaced atomically.
    File(Utf8PathBuf),
}

impl Destination {
    /// Writes `text` to this destination.
    ///
    /// File output is all-or-nothing: the text lands in a temporary sibling
    /// that is renamed over the target once fully written.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the writer or file cannot be written.
    pub fn write(&self, text: &str, stdout: impl Write) -> Result<(), OutputError> {
        match self {
            Self::Stdout => write_stream(text, stdout),
            Self::File(path) => write_file(path, text),
        }
    }
}

fn write_stream(text: &str, mut out: impl Write) -> Result<(), OutputError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| OutputError::StreamError {
            message: err.to_string(),
        })
}

fn write_file(path: &Utf8Path, text: &str) -> Result<(), OutputError> {
    let file_name = path.file_name().ok_or_else(|| OutputError::WriteError {
        path: path.to_path_buf(),
        message: "output path must name a file".to_owned(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        OutputError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    write_atomic(&dir, Utf8Path::new(file_name), text)?;
    info!(path = %path, bytes = text.len(), "wrote output file");
    Ok(())
}
