//! Merkle root computation over an ordered batch of SHA-256 leaf digests.
//!
//! Given N leaf digests in a stable order, this crate plans the tree's
//! level structure, allocates all nodes in per-level arenas, links
//! parent/child relationships by index arithmetic, and propagates SHA-256
//! hashes bottom-up to a single 32-byte root that commits to every leaf.
//!
//! An odd leaf count (above 1) is padded with one phantom leaf carrying a
//! copy of the last real leaf's digest, and every level above the leaves is
//! kept even the same way, so parent/child arithmetic never goes out of
//! range on the way to the root.
//!
//! # Core types
//!
//! - [`MerkleTree`] — build a tree, read its root, traverse it.
//! - [`LeafDigestSource`] — where leaf digests come from (implemented for
//!   `[Digest]`; filesystem sources live in the `batchroot-fs` crate).
//! - [`TreeStore`] — the per-level node arenas, addressed by [`NodeRef`].
//!
//! Construction is all-or-nothing: `build` either returns a complete,
//! immutable tree or a [`MerkleError`] with nothing retained.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod link;
pub(crate) mod plan;
pub(crate) mod store;
mod tree;


pub use error::{MerkleError, Result};
pub use hash::{combine_digests, Digest, DIGEST_LEN};
pub use store::{Node, NodeRef, TreeStore};
pub use tree::{LeafDigestSource, MerkleTree};
