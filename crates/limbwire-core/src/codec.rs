//! Tree codec: root + ordered leaves to and from a [`wire::Tree`].
//!
//! Leaf order on the wire carries no meaning. Each leaf is written with its
//! position in the original sequence and decoding places it back by that
//! index, leaving holes for positions no leaf claimed.

use primitive_types::U256;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::hex_value::{hexbytes_to_limbs, limbs_to_hexbytes};
use crate::limb::{uint256_to_limbs, LimbDecoding, Limbs};
use crate::wire::{self, Bytes32, Leaf, Uint256};

/// Decoded leaves, addressed by their wire index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSequence(Vec<Option<String>>);

impl LeafSequence {
    pub fn with_len(len: usize) -> Self {
        Self(vec![None; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position).and_then(|slot| slot.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|slot| slot.as_deref())
    }

    /// Positions that no decoded leaf claimed.
    pub fn holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.is_none().then_some(position))
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Unwrap every slot, failing at the first hole.
    pub fn into_complete(self) -> Result<Vec<String>> {
        self.0
            .into_iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or(Error::MissingLeaf { position }))
            .collect()
    }

    pub fn into_inner(self) -> Vec<Option<String>> {
        self.0
    }
}

/// Encodes trees and decodes them with a chosen [`LimbDecoding`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCodec {
    decoding: LimbDecoding,
}

impl TreeCodec {
    pub fn new(decoding: LimbDecoding) -> Self {
        Self { decoding }
    }

    /// Codec matching deployed decoders (16-bit limb shifts).
    pub fn legacy() -> Self {
        Self::new(LimbDecoding::Legacy)
    }

    /// Codec whose decoding is the exact inverse of encoding.
    pub fn exact() -> Self {
        Self::new(LimbDecoding::Exact)
    }

    pub fn decoding(&self) -> LimbDecoding {
        self.decoding
    }

    /// Map a hex root and ordered hex leaves onto the wire schema.
    pub fn encode<S: AsRef<str>>(&self, root_hash: &str, leaves: &[S]) -> Result<wire::Tree> {
        let root = hexbytes_to_limbs(root_hash)?;

        let leaves = leaves
            .iter()
            .enumerate()
            .map(|(i, leaf)| {
                Ok(Leaf {
                    leaf_hash: Some(Bytes32::from(hexbytes_to_limbs(leaf.as_ref())?)),
                    index: Some(Uint256::from(uint256_to_limbs(U256::from(i)))),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(leaves = leaves.len(), "Encoded tree");

        Ok(wire::Tree {
            root: Some(root.into()),
            leaves,
        })
    }

    /// Place every wire leaf at its index.
    ///
    /// Holes are left in place; call [`LeafSequence::into_complete`] when a
    /// full sequence is required. When two leaves claim the same index the
    /// later one wins.
    pub fn decode(&self, tree: &wire::Tree) -> Result<LeafSequence> {
        let len = tree.leaves.len();
        let mut output = LeafSequence::with_len(len);

        for leaf in &tree.leaves {
            let index = leaf.index.as_ref().ok_or(Error::MissingField("index"))?;
            let leaf_hash = leaf.leaf_hash.as_ref().ok_or(Error::MissingField("leafHash"))?;

            let index = self.decoding.decode(&Limbs::from(index));
            let position = to_position(index, len)?;

            let slot = &mut output.0[position];
            if slot.is_some() {
                warn!(position, "Duplicate leaf index, keeping the later leaf");
            }
            *slot = Some(limbs_to_hexbytes(&Limbs::from(leaf_hash), self.decoding));
        }

        debug!(
            leaves = len,
            holes = output.holes().count(),
            decoding = self.decoding.name(),
            "Decoded tree"
        );

        Ok(output)
    }

    /// Decode the root field.
    pub fn decode_root(&self, tree: &wire::Tree) -> Result<String> {
        let root = tree.root.as_ref().ok_or(Error::MissingField("root"))?;
        Ok(limbs_to_hexbytes(&Limbs::from(root), self.decoding))
    }

    /// Encode straight to protobuf bytes.
    pub fn to_bytes<S: AsRef<str>>(&self, root_hash: &str, leaves: &[S]) -> Result<Vec<u8>> {
        Ok(wire::encode_tree(&self.encode(root_hash, leaves)?))
    }

    /// Decode straight from protobuf bytes.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<LeafSequence> {
        self.decode(&wire::decode_tree(bytes)?)
    }
}

fn to_position(index: U256, len: usize) -> Result<usize> {
    let out_of_range = || Error::IndexOutOfRange { index, len };

    if index.bits() > 64 {
        return Err(out_of_range());
    }
    let position = usize::try_from(index.low_u64()).map_err(|_| out_of_range())?;
    if position >= len {
        return Err(out_of_range());
    }
    Ok(position)
}

/// Encode with the default codec.
pub fn tree_to_wire<S: AsRef<str>>(root_hash: &str, leaves: &[S]) -> Result<wire::Tree> {
    TreeCodec::legacy().encode(root_hash, leaves)
}

/// Decode with the legacy (wire compatible) codec.
pub fn wire_to_leaf_sequence(tree: &wire::Tree) -> Result<LeafSequence> {
    TreeCodec::legacy().decode(tree)
}
