use crate::{
    hash::{Digest, NULL_DIGEST},
    MerkleError, Result,
};

/// Address of a node inside a [`TreeStore`]: a `(level, index)` pair.
///
/// Level 0 is the leaf level; `index` is 0-based, left to right within the
/// level. Parent/child relationships are stored as these pairs rather than
/// as owned pointers, so every dereference is a bounds-checked arena
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    /// Level number, leaves at 0, root at the top.
    pub level: usize,
    /// Level-local index, 0-based, left to right.
    pub index: usize,
}

impl NodeRef {
    /// Shorthand constructor.
    pub fn new(level: usize, index: usize) -> Self {
        NodeRef { level, index }
    }
}

/// A single tree node: one digest plus its relationships.
///
/// The digest is written exactly once during the hashing phase (leaf
/// seeding at level 0, child combination above) and never mutated after
/// the tree is published. The root is the only node without a parent;
/// level-0 nodes are the only ones without children.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) digest: Digest,
    pub(crate) parent: Option<NodeRef>,
    pub(crate) left: Option<NodeRef>,
    pub(crate) right: Option<NodeRef>,
}

impl Node {
    /// A freshly allocated node: zero digest, no relationships.
    fn unlinked() -> Self {
        Node {
            digest: NULL_DIGEST,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// The node's digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent
    }

    /// The node's left child, or `None` at level 0 and for phantom nodes.
    pub fn left(&self) -> Option<NodeRef> {
        self.left
    }

    /// The node's right child, or `None` at level 0 and for phantom nodes.
    pub fn right(&self) -> Option<NodeRef> {
        self.right
    }
}

/// All tree nodes, organized as one contiguous arena per level.
///
/// Allocation is all-or-nothing: either every level materializes with its
/// planned node count or the store reports [`MerkleError::AllocationFailure`]
/// and nothing is retained. No hashing or linking happens here.
#[derive(Debug)]
pub struct TreeStore {
    levels: Vec<Vec<Node>>,
}

impl TreeStore {
    /// Allocate unlinked, zero-digest nodes for every planned level size.
    pub(crate) fn allocate(level_sizes: &[usize]) -> Result<Self> {
        let mut levels = Vec::new();
        levels.try_reserve_exact(level_sizes.len()).map_err(|e| {
            MerkleError::AllocationFailure(format!("{} levels: {e}", level_sizes.len()))
        })?;

        for &size in level_sizes {
            let mut level = Vec::new();
            level.try_reserve_exact(size).map_err(|e| {
                MerkleError::AllocationFailure(format!("level of {size} nodes: {e}"))
            })?;
            level.resize(size, Node::unlinked());
            levels.push(level);
        }
        Ok(TreeStore { levels })
    }

    /// Number of levels, leaves included.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of nodes at `level`, or `None` for a level that does not
    /// exist.
    pub fn level_size(&self, level: usize) -> Option<usize> {
        self.levels.get(level).map(Vec::len)
    }

    /// The node at `at`, or `None` if the address is out of bounds.
    pub fn node(&self, at: NodeRef) -> Option<&Node> {
        self.levels.get(at.level)?.get(at.index)
    }

    pub(crate) fn node_mut(&mut self, at: NodeRef) -> Option<&mut Node> {
        self.levels.get_mut(at.level)?.get_mut(at.index)
    }

    /// Iterate over levels bottom-up, each as a slice of nodes.
    pub fn levels(&self) -> impl Iterator<Item = &[Node]> {
        self.levels.iter().map(Vec::as_slice)
    }

    /// Address of the root node (the single node of the top level).
    pub(crate) fn root_ref(&self) -> NodeRef {
        NodeRef::new(self.levels.len() - 1, 0)
    }
}
