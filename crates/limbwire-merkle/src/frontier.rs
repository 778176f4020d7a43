//! Fixed-depth incremental tree backed by `bridgetree`.
//!
//! Leaves are appended left to right into a depth-32 tree padded with empty
//! nodes. Inner nodes commit to their level: `SHA-256(level || left || right)`.

use bridgetree::{BridgeTree, Hashable, Level};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::builder::{MerkleTree, TreeBuilder};
use crate::error::{MerkleError, Result};

/// Tree depth; the tree holds up to 2^32 leaves.
pub const FRONTIER_DEPTH: u8 = 32;

/// Layer-0 or inner node of a frontier tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node(pub Vec<u8>);

impl Hashable for Node {
    fn empty_leaf() -> Self {
        Node(Sha256::digest(b"").to_vec())
    }

    fn combine(level: Level, left: &Self, right: &Self) -> Self {
        let digest = Sha256::new()
            .chain_update([u8::from(level)])
            .chain_update(&left.0)
            .chain_update(&right.0)
            .finalize();
        Node(digest.to_vec())
    }
}

/// Bridge tree with 32 levels.
pub type FrontierTree = BridgeTree<Node, u64, FRONTIER_DEPTH>;

/// Builds append-only trees. Leaf order is significant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierBuilder {
    hash_leaves: bool,
}

impl FrontierBuilder {
    pub fn new(hash_leaves: bool) -> Self {
        Self { hash_leaves }
    }

    fn assemble(&self, nodes: Vec<Vec<u8>>) -> Result<MerkleTree> {
        if nodes.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut tree = FrontierTree::new(1);
        for node in &nodes {
            if !tree.append(Node(node.clone())) {
                return Err(MerkleError::TreeFull);
            }
        }

        let Some(root) = tree.root(0) else {
            return Err(MerkleError::RootUnavailable);
        };

        debug!(leaves = nodes.len(), "Built frontier tree");
        Ok(MerkleTree::new(root.0, nodes))
    }
}

impl TreeBuilder for FrontierBuilder {
    fn build(&self, leaves: &[Vec<u8>]) -> Result<MerkleTree> {
        let nodes = if self.hash_leaves {
            leaves.iter().map(|leaf| Sha256::digest(leaf).to_vec()).collect()
        } else {
            leaves.to_vec()
        };
        self.assemble(nodes)
    }

    fn build_from_nodes(&self, nodes: &[Vec<u8>]) -> Result<MerkleTree> {
        self.assemble(nodes.to_vec())
    }

    fn name(&self) -> &'static str {
        "frontier"
    }
}
