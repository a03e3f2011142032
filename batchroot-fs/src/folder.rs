use std::{
    fs,
    path::{Path, PathBuf},
};

use batchroot::{Digest, LeafDigestSource, MerkleError};

use crate::{digest_file, FsError};

/// List the regular files of `folder` in a stable order.
///
/// Entries are sorted by file name, so the leaf order does not depend on
/// the platform's directory iteration order. Subdirectories and other
/// non-file entries are skipped. An empty folder yields an empty list; the
/// tree engine then rejects the zero leaf count itself.
pub fn enumerate_leaves(folder: &Path) -> Result<Vec<PathBuf>, FsError> {
    let entries = fs::read_dir(folder).map_err(|e| FsError::folder(folder, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::folder(folder, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| FsError::unreadable(&entry.path(), e))?;
        if file_type.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// The ordered files of one folder, exposed as a [`LeafDigestSource`].
///
/// Enumeration happens once at [`FolderLeaves::open`]; each file's digest
/// is computed lazily when the tree engine asks for it, so a file deleted
/// in between fails that build with `MissingLeafDigest` rather than
/// silently committing stale content.
#[derive(Debug, Clone)]
pub struct FolderLeaves {
    paths: Vec<PathBuf>,
}

impl FolderLeaves {
    /// Enumerate `folder` and capture its files in leaf order.
    pub fn open(folder: &Path) -> Result<Self, FsError> {
        Ok(FolderLeaves {
            paths: enumerate_leaves(folder)?,
        })
    }

    /// The captured paths, in leaf order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl LeafDigestSource for FolderLeaves {
    fn leaf_count(&self) -> usize {
        self.paths.len()
    }

    fn leaf_digest(&self, index: usize) -> batchroot::Result<Digest> {
        let path = self
            .paths
            .get(index)
            .ok_or_else(|| MerkleError::MissingLeafDigest {
                index,
                reason: "index past the enumerated files".to_string(),
            })?;
        digest_file(path).map_err(|e| MerkleError::MissingLeafDigest {
            index,
            reason: e.to_string(),
        })
    }
}
