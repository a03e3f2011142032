//! Digest primitives and bottom-up hash propagation.
//!
//! Leaf digests are taken as-is from a [`LeafDigestSource`]; every internal
//! node hashes the 64-byte concatenation of its children's digests with
//! SHA-256. Phantom nodes introduced to keep a level even carry a copy of
//! a neighbor's digest instead (see [`propagate`]).

use sha2::{Digest as _, Sha256};

use crate::{store::NodeRef, tree::LeafDigestSource, MerkleError, Result, TreeStore};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest. Two digests are equal iff byte-for-byte equal.
pub type Digest = [u8; DIGEST_LEN];

/// Digest of a freshly allocated, not-yet-hashed node.
pub(crate) const NULL_DIGEST: Digest = [0u8; DIGEST_LEN];

/// Combine two child digests into their parent's: `SHA256(left || right)`.
pub fn combine_digests(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Seed level 0 from `source` and hash every level above it, in order.
///
/// `leaf_count` is the real leaf count the level plan was derived from;
/// the source is never re-consulted for it, so a source whose count
/// drifts mid-build cannot desync seeding from the allocated shape.
/// Level 0 takes the source's digests at indices `0..leaf_count`; a
/// padding slot (present when the real count was odd and above 1) takes a
/// copy of the last real digest. Each higher level is then computed from
/// the level below:
///
/// - both children present: `SHA256(left || right)`;
/// - left child only: copy of the left child's digest;
/// - no children (the trailing phantom of an evened level): copy of the
///   left sibling's digest.
///
/// A source that fails or runs out of digests aborts propagation with
/// [`MerkleError::MissingLeafDigest`]; the store is left to be dropped by
/// the caller.
pub(crate) fn propagate<S>(store: &mut TreeStore, source: &S, leaf_count: usize) -> Result<()>
where
    S: LeafDigestSource + ?Sized,
{
    seed_leaves(store, source, leaf_count)?;

    for level in 1..store.level_count() {
        let size = store
            .level_size(level)
            .ok_or_else(|| MerkleError::ShapeMismatch(format!("level {level} disappeared")))?;
        for index in 0..size {
            let at = NodeRef::new(level, index);
            let digest = node_digest(store, at)?;
            store
                .node_mut(at)
                .ok_or_else(|| MerkleError::ShapeMismatch(format!("no node at {at:?}")))?
                .digest = digest;
        }
    }
    Ok(())
}

/// Write the real leaf digests into level 0, then fill the padding slot.
fn seed_leaves<S>(store: &mut TreeStore, source: &S, real: usize) -> Result<()>
where
    S: LeafDigestSource + ?Sized,
{
    let level0 = store
        .level_size(0)
        .ok_or_else(|| MerkleError::ShapeMismatch("no leaf level".to_string()))?;
    if level0 < real || level0 > real + 1 {
        return Err(MerkleError::ShapeMismatch(format!(
            "leaf level has {level0} slots for {real} leaves"
        )));
    }

    for index in 0..real {
        let digest = source.leaf_digest(index)?;
        store
            .node_mut(NodeRef::new(0, index))
            .ok_or_else(|| MerkleError::ShapeMismatch(format!("no leaf slot {index}")))?
            .digest = digest;
    }

    // Padding leaf: a copy of the last real leaf's digest, not a re-hash.
    if level0 == real + 1 {
        let last = copy_digest(store, NodeRef::new(0, real - 1))?;
        store
            .node_mut(NodeRef::new(0, real))
            .ok_or_else(|| MerkleError::ShapeMismatch("no padding slot".to_string()))?
            .digest = last;
    }
    Ok(())
}

/// Digest for one internal node, from its (possibly absent) children.
fn node_digest(store: &TreeStore, at: NodeRef) -> Result<Digest> {
    let node = store
        .node(at)
        .ok_or_else(|| MerkleError::ShapeMismatch(format!("no node at {at:?}")))?;
    match (node.left, node.right) {
        (Some(left), Some(right)) => {
            Ok(combine_digests(&copy_digest(store, left)?, &copy_digest(store, right)?))
        }
        (Some(left), None) => copy_digest(store, left),
        (None, None) if at.index > 0 => {
            // Trailing phantom of an evened level: duplicate the digest of
            // the node to its left, same as the leaf-level padding rule.
            copy_digest(store, NodeRef::new(at.level, at.index - 1))
        }
        _ => Err(MerkleError::ShapeMismatch(format!(
            "node at {at:?} has an impossible child layout"
        ))),
    }
}

fn copy_digest(store: &TreeStore, at: NodeRef) -> Result<Digest> {
    store
        .node(at)
        .map(|n| n.digest)
        .ok_or_else(|| MerkleError::ShapeMismatch(format!("no node at {at:?}")))
}
