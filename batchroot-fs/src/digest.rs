use std::{fs::File, io, path::Path};

use batchroot::Digest;
use sha2::{Digest as _, Sha256};

use crate::FsError;

/// Compute the SHA-256 digest of a file's contents.
///
/// The file is streamed through the hasher in chunks, so arbitrarily large
/// leaves never load fully into memory. Any open or read failure is
/// [`FsError::UnreadableLeaf`].
pub fn digest_file(path: &Path) -> Result<Digest, FsError> {
    let mut file = File::open(path).map_err(|e| FsError::unreadable(path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| FsError::unreadable(path, e))?;
    Ok(hasher.finalize().into())
}
