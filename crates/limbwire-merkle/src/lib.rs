//! Merkle tree construction for limbwire.
//!
//! The codec in `limbwire-core` only ever sees hex strings. This crate
//! produces them: it builds a tree from raw leaves, exposes the root and the
//! ordered layer-0 nodes, and rebuilds a tree from decoded hex leaves so the
//! roots can be compared.
//!
//! # Main Components
//!
//! - [`builder::TreeBuilder`] - the injected tree-construction strategy
//! - [`sorted::SortedPairBuilder`] - binary tree over any `Digest`, with optional sorting
//! - [`frontier::FrontierBuilder`] - fixed-depth incremental tree backed by `bridgetree`
//! - [`rebuild`] - tree reconstruction from hex leaves
//! - [`leaves`] - random leaf generation for round-trip checks

pub mod builder;
pub mod error;
pub mod frontier;
pub mod leaves;
pub mod rebuild;
pub mod sorted;

pub use builder::{MerkleTree, TreeBuilder, TreeOptions};
pub use error::{MerkleError, Result};
pub use frontier::FrontierBuilder;
pub use rebuild::rebuild_from_hex;
pub use sorted::{Keccak256Builder, Sha256Builder, SortedPairBuilder};
