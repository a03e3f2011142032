use crate::{
    hash::{self, Digest},
    link, plan,
    store::{Node, NodeRef, TreeStore},
    MerkleError, Result,
};

/// Where leaf digests come from, in enumeration order.
///
/// The core only needs a count and a stable order; what a "leaf" is (a
/// file, a blob, a precomputed digest) is the implementor's business.
/// `leaf_digest` may be called lazily during the hashing phase, so the
/// content behind a leaf can disappear between enumeration and hashing —
/// implementors report that as [`MerkleError::MissingLeafDigest`].
pub trait LeafDigestSource {
    /// Number of real leaves this source can produce.
    ///
    /// Consulted exactly once per build; planning and seeding both use
    /// that single sample, so a drifting count surfaces as a digest
    /// failure rather than a shape inconsistency.
    fn leaf_count(&self) -> usize;

    /// Digest of the leaf at `index`, `0 <= index < leaf_count()`.
    fn leaf_digest(&self, index: usize) -> Result<Digest>;
}

impl LeafDigestSource for [Digest] {
    fn leaf_count(&self) -> usize {
        self.len()
    }

    fn leaf_digest(&self, index: usize) -> Result<Digest> {
        self.get(index)
            .copied()
            .ok_or_else(|| MerkleError::MissingLeafDigest {
                index,
                reason: "digest slice exhausted".to_string(),
            })
    }
}

/// A built Merkle tree: the root digest plus read-only traversal.
///
/// Produced by [`MerkleTree::build`] in one pass — plan the level sizes,
/// allocate the node arenas, link relationships, propagate hashes — and
/// immutable afterwards. On any failure along the way the partial state is
/// dropped and only the error surfaces.
#[derive(Debug)]
pub struct MerkleTree {
    store: TreeStore,
    leaf_count: usize,
    padded: bool,
}

impl MerkleTree {
    /// Build a tree committing every leaf of `source`.
    ///
    /// Fails with [`MerkleError::InvalidInput`] for an empty source, with
    /// [`MerkleError::MissingLeafDigest`] if the source cannot produce a
    /// digest it promised, and with [`MerkleError::AllocationFailure`] /
    /// [`MerkleError::ShapeMismatch`] for storage and internal-shape
    /// failures respectively.
    pub fn build<S>(source: &S) -> Result<Self>
    where
        S: LeafDigestSource + ?Sized,
    {
        let leaf_count = source.leaf_count();
        let sizes = plan::level_sizes(leaf_count)?;
        let mut store = TreeStore::allocate(&sizes)?;
        link::link(&mut store)?;
        hash::propagate(&mut store, source, leaf_count)?;
        Ok(MerkleTree {
            store,
            leaf_count,
            padded: sizes[0] > leaf_count,
        })
    }

    /// Build directly from precomputed digests.
    pub fn from_digests(digests: &[Digest]) -> Result<Self> {
        Self::build(digests)
    }

    /// The 32-byte root digest committing to all leaves.
    pub fn root(&self) -> &Digest {
        self.node(self.store.root_ref())
            .map(Node::digest)
            .expect("a built tree always has a root")
    }

    /// Number of real (non-padding) leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Whether a padding leaf was appended at level 0.
    pub fn padded(&self) -> bool {
        self.padded
    }

    /// Number of levels, from the leaves (level 0) to the root.
    pub fn level_count(&self) -> usize {
        self.store.level_count()
    }

    /// Number of nodes at `level`, or `None` past the top.
    pub fn level_size(&self, level: usize) -> Option<usize> {
        self.store.level_size(level)
    }

    /// The node at `at`, or `None` if the address is out of bounds.
    pub fn node(&self, at: NodeRef) -> Option<&Node> {
        self.store.node(at)
    }

    /// Iterate over levels bottom-up, each as a slice of nodes.
    pub fn levels(&self) -> impl Iterator<Item = &[Node]> {
        self.store.levels()
    }
}
