use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleError>`.
pub type Result<T> = core::result::Result<T, MerkleError>;

/// Errors from Merkle tree construction.
///
/// Every variant aborts the `build` call that produced it; no partial tree
/// is ever observable. None are retried internally — rebuilding is a
/// caller-level concern.
#[derive(Debug, Error)]
pub enum MerkleError {
    /// The input parameters cannot describe a tree (e.g. zero leaves).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Node storage could not be materialized; nothing was retained.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),
    /// An index computed from the level plan fell outside the target
    /// level's bounds. Indicates a planner/linker bug, not a user error.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// A leaf's digest could not be produced during the hashing phase,
    /// e.g. its content became unreadable after enumeration.
    #[error("missing digest for leaf {index}: {reason}")]
    MissingLeafDigest {
        /// Level-0 index of the leaf whose digest is unavailable.
        index: usize,
        /// Collaborator-supplied description of the failure.
        reason: String,
    },
}
