//! Tree reconstruction from decoded hex leaves.

use tracing::debug;

use crate::builder::{MerkleTree, TreeBuilder};
use crate::error::{MerkleError, Result};

/// Turn a hex leaf into bytes.
///
/// Accepts an optional `0x` prefix. Odd-length input is left-padded with a
/// single `'0'`, since decoders render values without leading zeros.
pub fn leaf_bytes(position: usize, hex_leaf: &str) -> Result<Vec<u8>> {
    let digits = hex_leaf.strip_prefix("0x").unwrap_or(hex_leaf);
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    };

    decoded.map_err(|e| MerkleError::InvalidLeaf {
        position,
        reason: e.to_string(),
    })
}

/// Rebuild a tree from layer-0 hex leaves.
///
/// The leaves are taken as nodes, never re-hashed, so this is the inverse of
/// reading [`MerkleTree::hex_leaves`].
pub fn rebuild_from_hex<B, S>(builder: &B, hex_leaves: &[S]) -> Result<MerkleTree>
where
    B: TreeBuilder + ?Sized,
    S: AsRef<str>,
{
    let nodes = hex_leaves
        .iter()
        .enumerate()
        .map(|(position, leaf)| leaf_bytes(position, leaf.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    debug!(leaves = nodes.len(), builder = builder.name(), "Rebuilding tree");
    builder.build_from_nodes(&nodes)
}
