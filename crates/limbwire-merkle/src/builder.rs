//! The tree-construction strategy seam.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Layer-0 preparation and pairing rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Hash every leaf before it becomes a layer-0 node.
    pub hash_leaves: bool,
    /// Sort layer-0 nodes bytewise.
    pub sort_leaves: bool,
    /// Order each pair bytewise before hashing it.
    pub sort_pairs: bool,
}

impl TreeOptions {
    /// Sorted leaves and sorted pairs, leaves taken as given.
    pub fn sorted() -> Self {
        Self {
            hash_leaves: false,
            sort_leaves: true,
            sort_pairs: true,
        }
    }

    pub fn with_hashed_leaves(mut self, hash_leaves: bool) -> Self {
        self.hash_leaves = hash_leaves;
        self
    }
}

/// A built tree: its root and its layer-0 nodes in tree order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    root: Vec<u8>,
    leaves: Vec<Vec<u8>>,
}

impl MerkleTree {
    pub fn new(root: Vec<u8>, leaves: Vec<Vec<u8>>) -> Self {
        Self { root, leaves }
    }

    pub fn root(&self) -> &[u8] {
        &self.root
    }

    pub fn leaves(&self) -> &[Vec<u8>] {
        &self.leaves
    }

    /// Root as `0x`-prefixed lowercase hex.
    pub fn hex_root(&self) -> String {
        format!("0x{}", hex::encode(&self.root))
    }

    /// Layer-0 nodes as unprefixed lowercase hex.
    pub fn hex_leaves(&self) -> Vec<String> {
        self.leaves.iter().map(hex::encode).collect()
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// Builds Merkle trees; the hash function is the implementor's business.
pub trait TreeBuilder: Send + Sync {
    /// Build a tree over raw leaf data.
    fn build(&self, leaves: &[Vec<u8>]) -> Result<MerkleTree>;

    /// Build a tree over values that are already layer-0 nodes.
    ///
    /// Used when reconstructing from [`MerkleTree::leaves`], which must not
    /// be hashed a second time.
    fn build_from_nodes(&self, nodes: &[Vec<u8>]) -> Result<MerkleTree>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

impl<T: TreeBuilder + ?Sized> TreeBuilder for Box<T> {
    fn build(&self, leaves: &[Vec<u8>]) -> Result<MerkleTree> {
        (**self).build(leaves)
    }

    fn build_from_nodes(&self, nodes: &[Vec<u8>]) -> Result<MerkleTree> {
        (**self).build_from_nodes(nodes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
