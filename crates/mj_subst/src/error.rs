//! File-access failures raised by the processing driver.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The single failure taxonomy of the preprocessor: a file could not be
/// read, written, or appended to. The first error aborts the whole run;
/// outputs already written stay on disk.
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to {}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileAccessError {
    /// The path that could not be accessed.
    pub fn path(&self) -> &Path {
        match self {
            FileAccessError::Read { path, .. }
            | FileAccessError::Write { path, .. }
            | FileAccessError::Append { path, .. } => path,
        }
    }
}
