//! Parent/child linking by index arithmetic, run once between allocation
//! and hashing.

use crate::{store::NodeRef, MerkleError, Result, TreeStore};

/// Establish every parent/child relationship in the store.
///
/// For the node at `(level, index)`:
/// - its parent is `(level + 1, index / 2)`; the top level has no parent;
/// - its children, when `level >= 1`, are `(level - 1, 2 * index)` and
///   `(level - 1, 2 * index + 1)`, each set only if that index exists in
///   the level below. The trailing phantom of an evened level ends up with
///   no children.
///
/// A parent index outside the level above is a planner/store
/// inconsistency and fails with [`MerkleError::ShapeMismatch`].
pub(crate) fn link(store: &mut TreeStore) -> Result<()> {
    let top = store.level_count() - 1;

    for level in 0..=top {
        let size = store
            .level_size(level)
            .ok_or_else(|| MerkleError::ShapeMismatch(format!("level {level} disappeared")))?;
        let below_size = if level > 0 { store.level_size(level - 1) } else { None };
        let above_size = if level < top { store.level_size(level + 1) } else { None };

        for index in 0..size {
            let at = NodeRef::new(level, index);

            let parent = match above_size {
                Some(above) => {
                    let p = index / 2;
                    if p >= above {
                        return Err(MerkleError::ShapeMismatch(format!(
                            "parent index {p} out of bounds for level {} of size {above}",
                            level + 1
                        )));
                    }
                    Some(NodeRef::new(level + 1, p))
                }
                None => None,
            };

            let (left, right) = match below_size {
                Some(below) => {
                    let l = 2 * index;
                    let r = 2 * index + 1;
                    (
                        (l < below).then(|| NodeRef::new(level - 1, l)),
                        (r < below).then(|| NodeRef::new(level - 1, r)),
                    )
                }
                None => (None, None),
            };

            let node = store
                .node_mut(at)
                .ok_or_else(|| MerkleError::ShapeMismatch(format!("no node at {at:?}")))?;
            node.parent = parent;
            node.left = left;
            node.right = right;
        }
    }
    Ok(())
}
