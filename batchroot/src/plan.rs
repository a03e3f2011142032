use crate::{MerkleError, Result};

/// Compute the per-level node counts for a tree over `leaf_count` leaves.
///
/// Index 0 is the leaf level; the last entry is always 1 (the root). An odd
/// count above 1 is rounded up to even — at level 0 for the padding leaf,
/// and at every higher level so that parent/child index arithmetic stays in
/// range all the way up. A single leaf yields `[1]`: that node is both
/// leaf and root.
pub(crate) fn level_sizes(leaf_count: usize) -> Result<Vec<usize>> {
    if leaf_count == 0 {
        return Err(MerkleError::InvalidInput(
            "a tree requires at least one leaf".to_string(),
        ));
    }

    let mut n = round_up_to_even(leaf_count);
    let mut sizes = vec![n];
    while n > 1 {
        n = round_up_to_even(n.div_ceil(2));
        sizes.push(n);
    }
    Ok(sizes)
}

/// Round an odd count above 1 up to even; 1 and even counts pass through.
fn round_up_to_even(n: usize) -> usize {
    if n % 2 == 1 && n > 1 { n + 1 } else { n }
}
