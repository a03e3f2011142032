use std::fs;

use assert_matches::assert_matches;
use batchroot::{Digest, LeafDigestSource, MerkleError, MerkleTree};
use sha2::{Digest as _, Sha256};
use tempfile::TempDir;

use super::*;

/// A folder with the given `(name, contents)` files.
fn folder_with(files: &[(&str, &[u8])]) -> TempDir {
    let dir = TempDir::new().expect("create temp folder");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write leaf file");
    }
    dir
}

#[test]
fn test_enumeration_is_sorted_by_name() {
    // Created out of order on purpose; enumeration must not depend on
    // creation or directory order.
    let dir = folder_with(&[
        ("block_2.txt", b"two"),
        ("block_0.txt", b"zero"),
        ("block_1.txt", b"one"),
    ]);

    let paths = enumerate_leaves(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["block_0.txt", "block_1.txt", "block_2.txt"]);
}

#[test]
fn test_enumeration_skips_subdirectories() {
    let dir = folder_with(&[("block_0.txt", b"zero")]);
    fs::create_dir(dir.path().join("nested")).unwrap();

    let paths = enumerate_leaves(dir.path()).unwrap();
    assert_eq!(paths.len(), 1);
}

#[test]
fn test_enumeration_of_missing_folder_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");
    assert_matches!(enumerate_leaves(&missing), Err(FsError::Folder { .. }));
}

#[test]
fn test_digest_file_streams_sha256() {
    let dir = folder_with(&[("block_0.txt", b"transaction payload")]);
    let digest = digest_file(&dir.path().join("block_0.txt")).unwrap();

    let expected: Digest = Sha256::digest(b"transaction payload").into();
    assert_eq!(digest, expected);
    assert_eq!(hex::encode(digest).len(), 64);
}

#[test]
fn test_digest_of_missing_file_is_unreadable_leaf() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    assert_matches!(digest_file(&missing), Err(FsError::UnreadableLeaf { .. }));
}

#[test]
fn test_folder_root_matches_precomputed_digests() {
    let files: &[(&str, &[u8])] = &[
        ("block_0.txt", b"alpha"),
        ("block_1.txt", b"bravo"),
        ("block_2.txt", b"charlie"),
    ];
    let dir = folder_with(files);

    let leaves = FolderLeaves::open(dir.path()).unwrap();
    let from_folder = *MerkleTree::build(&leaves).unwrap().root();

    let digests: Vec<Digest> = files
        .iter()
        .map(|(_, contents)| Sha256::digest(contents).into())
        .collect();
    let from_digests = *MerkleTree::from_digests(&digests).unwrap().root();

    assert_eq!(from_folder, from_digests);
}

#[test]
fn test_rebuild_of_same_folder_is_deterministic() {
    let dir = folder_with(&[("block_0.txt", b"same"), ("block_1.txt", b"bytes")]);
    let first = *MerkleTree::build(&FolderLeaves::open(dir.path()).unwrap())
        .unwrap()
        .root();
    let second = *MerkleTree::build(&FolderLeaves::open(dir.path()).unwrap())
        .unwrap()
        .root();
    assert_eq!(first, second);
}

#[test]
fn test_changed_file_changes_the_root() {
    let dir = folder_with(&[("block_0.txt", b"original"), ("block_1.txt", b"fixed")]);
    let before = *MerkleTree::build(&FolderLeaves::open(dir.path()).unwrap())
        .unwrap()
        .root();

    fs::write(dir.path().join("block_0.txt"), b"tampered").unwrap();
    let after = *MerkleTree::build(&FolderLeaves::open(dir.path()).unwrap())
        .unwrap()
        .root();

    assert_ne!(before, after);
}

#[test]
fn test_file_deleted_after_enumeration_fails_the_build() {
    let dir = folder_with(&[("block_0.txt", b"keep"), ("block_1.txt", b"doomed")]);
    let leaves = FolderLeaves::open(dir.path()).unwrap();
    assert_eq!(leaves.leaf_count(), 2);

    fs::remove_file(dir.path().join("block_1.txt")).unwrap();
    assert_matches!(
        MerkleTree::build(&leaves),
        Err(MerkleError::MissingLeafDigest { index: 1, .. })
    );
}

#[test]
fn test_empty_folder_is_rejected_by_the_engine() {
    let dir = TempDir::new().unwrap();
    let leaves = FolderLeaves::open(dir.path()).unwrap();
    assert_eq!(leaves.leaf_count(), 0);
    assert_matches!(
        MerkleTree::build(&leaves),
        Err(MerkleError::InvalidInput(_))
    );
}
