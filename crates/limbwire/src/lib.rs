//! Limbwire: order-preserving four-limb wire encoding for Merkle trees.
//!
//! This is the main entry point for applications. It re-exports the codec
//! from `limbwire-core`, the tree builders from `limbwire-merkle`, and adds
//! the [`roundtrip`] harness that ties them together.

pub use limbwire_core as core;
pub use limbwire_merkle as merkle;

pub mod roundtrip;

pub use roundtrip::{RoundTrip, RoundTripError, RoundTripReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        limb::{uint256_to_limbs, limbs_to_uint256, LimbDecoding, Limbs},
        hex_value::{hexbytes_to_limbs, limbs_to_hexbytes},
        codec::{tree_to_wire, wire_to_leaf_sequence, LeafSequence, TreeCodec},
        wire, U256,
    };

    pub use crate::merkle::{
        FrontierBuilder, Keccak256Builder, MerkleTree, Sha256Builder, TreeBuilder, TreeOptions,
        rebuild_from_hex,
    };

    pub use crate::{RoundTrip, RoundTripError, RoundTripReport};
}
