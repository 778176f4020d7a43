//! Binary Merkle tree over any `Digest`.
//!
//! Layer 0 is the (optionally hashed, optionally sorted) leaf list. Each
//! following layer hashes neighbouring pairs `left || right`; an unpaired
//! last node is carried up unchanged. With `sort_pairs` the two halves are
//! ordered bytewise first, which makes proofs position-independent.

use std::marker::PhantomData;

use sha2::{Digest, Sha256};
use sha3::Keccak256;
use tracing::debug;

use crate::builder::{MerkleTree, TreeBuilder, TreeOptions};
use crate::error::Result;

/// Sorted-pair tree builder generic over the hash function.
#[derive(Debug, Clone)]
pub struct SortedPairBuilder<D> {
    options: TreeOptions,
    _digest: PhantomData<fn() -> D>,
}

/// Keccak-256 trees.
pub type Keccak256Builder = SortedPairBuilder<Keccak256>;

/// SHA-256 trees.
pub type Sha256Builder = SortedPairBuilder<Sha256>;

impl<D> Default for SortedPairBuilder<D> {
    fn default() -> Self {
        Self::new(TreeOptions::sorted())
    }
}

impl<D> SortedPairBuilder<D> {
    pub fn new(options: TreeOptions) -> Self {
        Self {
            options,
            _digest: PhantomData,
        }
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }
}

impl<D: Digest> SortedPairBuilder<D> {
    fn hash(data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }

    fn combine(&self, left: &[u8], right: &[u8]) -> Vec<u8> {
        let (left, right) = if self.options.sort_pairs && right < left {
            (right, left)
        } else {
            (left, right)
        };

        let mut data = Vec::with_capacity(left.len() + right.len());
        data.extend_from_slice(left);
        data.extend_from_slice(right);
        Self::hash(&data)
    }

    fn assemble(&self, mut nodes: Vec<Vec<u8>>) -> MerkleTree {
        if self.options.sort_leaves {
            nodes.sort();
        }

        let mut layer = nodes.clone();
        let mut depth = 0usize;
        while layer.len() > 1 {
            layer = layer
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => self.combine(left, right),
                    _ => pair[0].clone(),
                })
                .collect();
            depth += 1;
        }

        let root = layer.pop().unwrap_or_default();
        debug!(leaves = nodes.len(), depth, "Built sorted-pair tree");

        MerkleTree::new(root, nodes)
    }
}

impl<D: Digest> TreeBuilder for SortedPairBuilder<D> {
    fn build(&self, leaves: &[Vec<u8>]) -> Result<MerkleTree> {
        let nodes = if self.options.hash_leaves {
            leaves.iter().map(|leaf| Self::hash(leaf)).collect()
        } else {
            leaves.to_vec()
        };
        Ok(self.assemble(nodes))
    }

    fn build_from_nodes(&self, nodes: &[Vec<u8>]) -> Result<MerkleTree> {
        Ok(self.assemble(nodes.to_vec()))
    }

    fn name(&self) -> &'static str {
        "sorted-pair"
    }
}
