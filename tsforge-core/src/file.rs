//! Write-once file persistence.
//!
//! Generated files are never overwritten: an existing file at the target
//! path is treated as hand-edited and left untouched. The create step uses
//! `create_new` so the existence check and the write are a single atomic
//! filesystem operation.

use std::{
    fs::{self, OpenOptions},
    io::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// A successfully written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// Absolute path of the new file, for callers that want to open it.
    pub path: PathBuf,
}

/// Errors from [`write_new`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// The target file already exists and was left untouched.
    #[error("'{path}' already exists")]
    AlreadyExists { path: PathBuf },

    /// The file could not be created or written.
    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `content` to `directory/file_name`, creating missing directories.
///
/// Fails with [`WriteError::AlreadyExists`] when the target file exists;
/// nothing is written in that case. Directories are created before the file
/// is touched, so a partial failure leaves at most empty directories behind.
pub fn write_new(directory: &Path, file_name: &str, content: &str) -> Result<Written, WriteError> {
    let path = directory.join(file_name);

    fs::create_dir_all(directory).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| {
            if source.kind() == std::io::ErrorKind::AlreadyExists {
                WriteError::AlreadyExists { path: path.clone() }
            } else {
                WriteError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;

    let path = std::path::absolute(&path).unwrap_or(path);
    Ok(Written { path })
}
