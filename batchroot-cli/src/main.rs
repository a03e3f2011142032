//! Command-line front end: commit a folder of files to a SHA-256 Merkle
//! root, with optional tree dump and build timing.

use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use batchroot::MerkleTree;
use batchroot_fs::FolderLeaves;
use clap::Parser;

#[derive(Parser)]
#[command(name = "batchroot")]
#[command(about = "Commit a folder of files to a single SHA-256 Merkle root")]
struct Args {
    /// Folder whose files become the tree's leaves, in file-name order
    folder: PathBuf,

    /// Print every level of the tree, root first
    #[arg(long)]
    dump: bool,

    /// Report how long the build took
    #[arg(long)]
    timing: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let leaves = FolderLeaves::open(&args.folder)
        .with_context(|| format!("enumerating {}", args.folder.display()))?;

    let t0 = Instant::now();
    let tree = MerkleTree::build(&leaves)
        .with_context(|| format!("building the tree over {}", args.folder.display()))?;
    let elapsed = t0.elapsed();

    if args.dump {
        dump_tree(&tree);
    }
    println!("root: {}", hex::encode(tree.root()));
    if args.timing {
        println!(
            "built {} leaves across {} levels in {:.3}ms",
            tree.leaf_count(),
            tree.level_count(),
            elapsed.as_secs_f64() * 1e3
        );
    }
    Ok(())
}

/// Print every node, top level first: hex digest plus its relationships.
fn dump_tree(tree: &MerkleTree) {
    let levels: Vec<_> = tree.levels().collect();
    for (level, nodes) in levels.iter().enumerate().rev() {
        println!(
            "level {level} ({} node{}):",
            nodes.len(),
            if nodes.len() == 1 { "" } else { "s" }
        );
        for (index, node) in nodes.iter().enumerate() {
            let relation = match node.parent() {
                Some(p) => format!("parent ({}, {})", p.level, p.index),
                None => "root".to_string(),
            };
            println!("  [{index}] {}  {relation}", hex::encode(node.digest()));
        }
    }
}
