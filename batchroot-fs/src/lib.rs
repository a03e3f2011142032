//! Filesystem leaf sources for `batchroot`.
//!
//! The tree engine consumes an ordered sequence of leaf digests; this crate
//! supplies them from a folder of files: stable enumeration (regular files,
//! sorted by name) plus streaming SHA-256 hashing of each file's contents.
//!
//! # Core types
//!
//! - [`FolderLeaves`] — a folder's files as a `LeafDigestSource`.
//! - [`enumerate_leaves`] — stable enumeration on its own.
//! - [`digest_file`] — streaming SHA-256 of one file.
//!
//! A file that disappears or becomes unreadable between enumeration and
//! hashing surfaces as `MerkleError::MissingLeafDigest` from the build, per
//! the engine's error taxonomy.

#![warn(missing_docs)]

mod digest;
mod error;
mod folder;

#[cfg(test)]
mod tests;

pub use digest::digest_file;
pub use error::FsError;
pub use folder::{enumerate_leaves, FolderLeaves};
