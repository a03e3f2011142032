use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from the filesystem collaborators.
#[derive(Debug, Error)]
pub enum FsError {
    /// The leaf folder could not be opened or iterated.
    #[error("cannot read folder {}: {source}", path.display())]
    Folder {
        /// The folder that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A leaf file could not be opened or read.
    #[error("unreadable leaf {}: {source}", path.display())]
    UnreadableLeaf {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn folder(path: &std::path::Path, source: io::Error) -> Self {
        FsError::Folder {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn unreadable(path: &std::path::Path, source: io::Error) -> Self {
        FsError::UnreadableLeaf {
            path: path.to_path_buf(),
            source,
        }
    }
}
