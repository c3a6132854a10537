//! Error types shared by the library
//!
//! Every failing filesystem call is mapped onto one of these variants so callers
//! can tell a missing path from a wrong entry kind or a rename collision.

use std::io;
use std::path::{Path, PathBuf};

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ComfortError>;

/// Errors raised by the files helpers
#[derive(Debug, thiserror::Error)]
pub enum ComfortError {
    /// Path or file does not exist
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A directory was required but the path is something else
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A regular file was required but the path is something else
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Rename destination is already taken
    #[error("Cannot rename {} to {}: destination already exists", .from.display(), .to.display())]
    AlreadyExists { from: PathBuf, to: PathBuf },

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Input that does not have the expected shape (e.g. a nested dictionary)
    #[error("Malformed input in {}: {message}", .path.display())]
    MalformedInput { path: PathBuf, message: String },

    /// Any other I/O failure, with the path it happened on
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while walking a directory that is not an I/O error (a link loop)
    #[error("Failed to walk directory: {0}")]
    Traversal(#[source] walkdir::Error),
}

impl From<walkdir::Error> for ComfortError {
    fn from(err: walkdir::Error) -> Self {
        match (err.path().map(Path::to_path_buf), err.io_error().map(io::Error::kind)) {
            (Some(path), Some(kind)) => ComfortError::from_io(&path, io::Error::new(kind, err)),
            _ => ComfortError::Traversal(err),
        }
    }
}

impl ComfortError {
    /// Map an `io::Error` raised on `path` onto the error taxonomy.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ComfortError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ComfortError::PermissionDenied(path.to_path_buf()),
            _ => ComfortError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Extension for attaching a path to raw `io::Result`s
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| ComfortError::from_io(path, e))
    }
}
