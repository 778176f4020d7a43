//! Core codecs for the limbwire toolchain.
//!
//! This crate converts 256-bit values to and from the four-limb wire
//! representation and maps an ordered Merkle leaf sequence onto the
//! protobuf `Tree` message. It knows nothing about hashing: tree
//! construction lives in `limbwire-merkle`.
//!
//! Layers, bottom up:
//!
//! - [`limb`] - `U256` to `(part1, part2, part3, part4)` and back
//! - [`hex_value`] - opaque 32-byte hex values carried in the same limbs
//! - [`wire`] - the prost messages and the byte-level codec
//! - [`codec`] - root + indexed leaves to and from a [`wire::Tree`]

pub mod codec;
pub mod error;
pub mod hex_value;
pub mod limb;
pub mod wire;

pub use codec::{tree_to_wire, wire_to_leaf_sequence, LeafSequence, TreeCodec};
pub use error::{Error, Result};
pub use hex_value::{hexbytes_to_limbs, limbs_to_hexbytes};
pub use limb::{limbs_to_uint256, uint256_to_limbs, LimbDecoding, Limbs};

// Re-export the integer types used across the public API
pub use primitive_types::{U256, U512};
