//! Read a whole text file into memory with classified failures.
//!
//! Expected failures (missing path, no permission, directory, invalid UTF-8)
//! propagate as [`ReadError`]. Anything else is logged and, through
//! [`read_file_content`], reported as `Ok(None)`. Callers that prefer uniform
//! propagation use [`read_file_strict`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::{error, info};

/// Source of raw file bytes.
pub trait ByteSource {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl ByteSource for StdFs {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<F> ByteSource for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    Decode,
    Unknown,
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Permission denied for file: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Expected a file but found a directory: {}", .path.display())]
    IsDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "File at {} is not UTF-8 encoded or contains invalid characters (first invalid byte at offset {}).",
        .path.display(),
        .source.utf8_error().valid_up_to()
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error(
        "An unexpected error occurred while reading the file at {}: {source}",
        .path.display()
    )]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn kind(&self) -> ReadErrorKind {
        match self {
            ReadError::NotFound { .. } => ReadErrorKind::NotFound,
            ReadError::PermissionDenied { .. } => ReadErrorKind::PermissionDenied,
            ReadError::IsDirectory { .. } => ReadErrorKind::IsDirectory,
            ReadError::Decode { .. } => ReadErrorKind::Decode,
            ReadError::Unknown { .. } => ReadErrorKind::Unknown,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ReadError::NotFound { path, .. }
            | ReadError::PermissionDenied { path, .. }
            | ReadError::IsDirectory { path, .. }
            | ReadError::Decode { path, .. }
            | ReadError::Unknown { path, .. } => path,
        }
    }

    /// Map an I/O failure onto the error taxonomy.
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path, source },
            io::ErrorKind::IsADirectory => ReadError::IsDirectory { path, source },
            // Windows reports opening a directory as access denied.
            io::ErrorKind::PermissionDenied if cfg!(windows) && path.is_dir() => {
                ReadError::IsDirectory { path, source }
            }
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path, source },
            _ => ReadError::Unknown { path, source },
        }
    }
}

/// File reader over a pluggable [`ByteSource`].
#[derive(Debug, Clone, Default)]
pub struct FileReader<S = StdFs> {
    source: S,
}

impl<S: ByteSource> FileReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read `path` as UTF-8, propagating every failure kind.
    ///
    /// Logs before the attempt, after success, and at error level for each
    /// failure.
    pub fn read_strict(&self, path: &Path) -> Result<String, ReadError> {
        info!("Attempting to read file: {}", path.display());
        match self.load(path) {
            Ok(content) => {
                info!("Successfully read file: {}", path.display());
                Ok(content)
            }
            Err(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }

    /// Read `path` as UTF-8, returning `Ok(None)` for unclassified failures.
    ///
    /// An empty file yields `Ok(Some(String::new()))`, never `None`.
    pub fn read(&self, path: &Path) -> Result<Option<String>, ReadError> {
        match self.read_strict(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ReadErrorKind::Unknown => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn load(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = self
            .source
            .read_bytes(path)
            .map_err(|source| ReadError::from_io(path, source))?;
        String::from_utf8(bytes).map_err(|source| ReadError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Read a file from disk; unclassified failures are logged and yield `Ok(None)`.
pub fn read_file_content(path: impl AsRef<Path>) -> Result<Option<String>, ReadError> {
    FileReader::new(StdFs).read(path.as_ref())
}

/// Read a file from disk, propagating every failure including [`ReadErrorKind::Unknown`].
pub fn read_file_strict(path: impl AsRef<Path>) -> Result<String, ReadError> {
    FileReader::new(StdFs).read_strict(path.as_ref())
}
