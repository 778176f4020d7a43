//! Protobuf wire schema.
//!
//! Equivalent to:
//!
//! ```protobuf
//! message Uint256 { optional uint64 part1 = 1; optional uint64 part2 = 2;
//!                   optional uint64 part3 = 3; optional uint64 part4 = 4; }
//! message Bytes32 { /* same fields as Uint256 */ }
//! message Leaf    { optional Bytes32 leafHash = 1; optional Uint256 index = 2; }
//! message Tree    { optional Bytes32 root = 1; repeated Leaf leaves = 2; }
//! ```
//!
//! Protobuf makes no promise about the order of repeated fields across
//! implementations, which is why every [`Leaf`] carries its own index.

pub use prost::Message;

use crate::error::Result;
use crate::limb::Limbs;

/// A 256-bit unsigned integer split into four limbs.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Uint256 {
    #[prost(uint64, optional, tag = "1")]
    pub part1: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub part2: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "3")]
    pub part3: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "4")]
    pub part4: ::core::option::Option<u64>,
}

/// An opaque 32-byte value split into four limbs.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Bytes32 {
    #[prost(uint64, optional, tag = "1")]
    pub part1: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub part2: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "3")]
    pub part3: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "4")]
    pub part4: ::core::option::Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Leaf {
    #[prost(message, optional, tag = "1")]
    pub leaf_hash: ::core::option::Option<Bytes32>,
    #[prost(message, optional, tag = "2")]
    pub index: ::core::option::Option<Uint256>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tree {
    #[prost(message, optional, tag = "1")]
    pub root: ::core::option::Option<Bytes32>,
    #[prost(message, repeated, tag = "2")]
    pub leaves: ::prost::alloc::vec::Vec<Leaf>,
}

macro_rules! impl_limb_message {
    ($msg:ident) => {
        impl From<Limbs> for $msg {
            fn from(limbs: Limbs) -> Self {
                Self {
                    part1: Some(limbs.part1),
                    part2: Some(limbs.part2),
                    part3: Some(limbs.part3),
                    part4: Some(limbs.part4),
                }
            }
        }

        impl From<&$msg> for Limbs {
            fn from(msg: &$msg) -> Self {
                Limbs::from_parts(msg.part1, msg.part2, msg.part3, msg.part4)
            }
        }

        impl From<$msg> for Limbs {
            fn from(msg: $msg) -> Self {
                Limbs::from(&msg)
            }
        }
    };
}

impl_limb_message!(Uint256);
impl_limb_message!(Bytes32);

/// Serialize a tree to protobuf bytes.
pub fn encode_tree(tree: &Tree) -> Vec<u8> {
    tree.encode_to_vec()
}

/// Deserialize a tree from protobuf bytes.
pub fn decode_tree(bytes: &[u8]) -> Result<Tree> {
    Ok(Tree::decode(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parts_are_not_encoded() {
        let sparse = Uint256 {
            part1: Some(7),
            ..Default::default()
        };
        // one key byte + one varint byte
        assert_eq!(sparse.encode_to_vec(), vec![0x08, 0x07]);
        assert_eq!(Limbs::from(&sparse), Limbs::from_parts(Some(7), None, None, None));
    }

    #[test]
    fn zero_parts_are_present_on_the_wire() {
        let msg = Bytes32::from(Limbs::ZERO);
        let decoded = Bytes32::decode(msg.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.part4, Some(0));
        assert_eq!(decoded, msg);
    }

    #[test]
    fn tree_bytes_round_trip() {
        let limbs = Limbs {
            part1: 1,
            part2: 2,
            part3: 3,
            part4: 4,
        };
        let tree = Tree {
            root: Some(limbs.into()),
            leaves: vec![Leaf {
                leaf_hash: Some(limbs.into()),
                index: Some(Limbs::ZERO.into()),
            }],
        };

        let decoded = decode_tree(&encode_tree(&tree)).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        // field 1, length-delimited, claims five bytes but carries one
        let result = decode_tree(&[0x0a, 0x05, 0x01]);
        assert!(matches!(result, Err(crate::Error::Decode(_))));
    }
}
