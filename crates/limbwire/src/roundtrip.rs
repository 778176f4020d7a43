//! Build, encode, serialize, deserialize, decode, rebuild, compare.
//!
//! The harness answers one question: does a tree survive the protobuf wire
//! format with its root intact, even though the format makes no promise
//! about the order of repeated fields?

use limbwire_core::{wire, LimbDecoding, TreeCodec};
use limbwire_merkle::rebuild::leaf_bytes;
use limbwire_merkle::{rebuild_from_hex, MerkleError, TreeBuilder};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum RoundTripError {
    #[error("Codec error: {0}")]
    Codec(#[from] limbwire_core::Error),

    #[error("Tree error: {0}")]
    Tree(#[from] MerkleError),

    #[error("Leaf {position} is {len} bytes; exact decoding restores 32-byte nodes only (hash the leaves first)")]
    LeafWidth { position: usize, len: usize },
}

/// Width of a layer-0 node that exact decoding restores unchanged.
pub const NODE_BYTES: usize = 32;

/// Outcome of a single round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    pub builder: &'static str,
    pub decoding: LimbDecoding,
    pub leaves: usize,
    /// Size of the serialized `Tree` message.
    pub wire_bytes: usize,
    pub expected_root: String,
    pub actual_root: String,
    /// Decoded leaves that differ from the layer-0 nodes that were sent.
    pub altered_leaves: usize,
}

impl RoundTripReport {
    pub fn matches(&self) -> bool {
        self.expected_root == self.actual_root
    }
}

/// Drives a tree through the wire format and back.
pub struct RoundTrip<B> {
    builder: B,
    codec: TreeCodec,
}

impl<B: TreeBuilder> RoundTrip<B> {
    pub fn new(builder: B, codec: TreeCodec) -> Self {
        Self { builder, codec }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn codec(&self) -> TreeCodec {
        self.codec
    }

    pub fn run(&self, leaves: &[Vec<u8>]) -> Result<RoundTripReport, RoundTripError> {
        let expected = self.builder.build(leaves)?;
        if self.codec.decoding() == LimbDecoding::Exact {
            check_node_width(expected.leaves())?;
        }
        let sent = expected.hex_leaves();

        let tree = self.codec.encode(&expected.hex_root(), &sent)?;
        let bytes = wire::encode_tree(&tree);
        debug!(bytes = bytes.len(), "Serialized tree");

        let received = wire::decode_tree(&bytes)?;
        let decoded = self.codec.decode(&received)?.into_complete()?;
        let altered_leaves = count_altered(expected.leaves(), &decoded)?;
        let actual = rebuild_from_hex(&self.builder, &decoded)?;

        let report = RoundTripReport {
            builder: self.builder.name(),
            decoding: self.codec.decoding(),
            leaves: leaves.len(),
            wire_bytes: bytes.len(),
            expected_root: expected.hex_root(),
            actual_root: actual.hex_root(),
            altered_leaves,
        };

        info!(
            builder = report.builder,
            decoding = report.decoding.name(),
            leaves = report.leaves,
            matches = report.matches(),
            "Round trip finished"
        );

        Ok(report)
    }
}

fn check_node_width(nodes: &[Vec<u8>]) -> Result<(), RoundTripError> {
    match nodes.iter().position(|node| node.len() != NODE_BYTES) {
        Some(position) => Err(RoundTripError::LeafWidth {
            position,
            len: nodes[position].len(),
        }),
        None => Ok(()),
    }
}

/// Count decoded leaves whose bytes differ from the node sent at the same
/// position. Compared before rebuilding, which may reorder leaves.
fn count_altered(sent: &[Vec<u8>], decoded: &[String]) -> Result<usize, RoundTripError> {
    let mut altered = 0;
    for (position, (node, leaf)) in sent.iter().zip(decoded).enumerate() {
        if leaf_bytes(position, leaf)? != *node {
            altered += 1;
        }
    }
    Ok(altered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use limbwire_merkle::leaves::random_leaves;
    use limbwire_merkle::{FrontierBuilder, Keccak256Builder, Sha256Builder, TreeOptions};
    use rand::{rngs::StdRng, SeedableRng};

    fn short_leaves() -> Vec<Vec<u8>> {
        random_leaves(&mut StdRng::seed_from_u64(2024), 100, 5)
    }

    #[test]
    fn short_leaves_survive_legacy_decoding() {
        let harness = RoundTrip::new(Keccak256Builder::default(), TreeCodec::legacy());
        let report = harness.run(&short_leaves()).unwrap();

        assert!(report.matches());
        assert_eq!(report.leaves, 100);
        assert_eq!(report.altered_leaves, 0);
        assert!(report.wire_bytes > 0);
    }

    #[test]
    fn hashed_leaves_break_legacy_decoding() {
        let options = TreeOptions::sorted().with_hashed_leaves(true);
        let harness = RoundTrip::new(Keccak256Builder::new(options), TreeCodec::legacy());
        let report = harness.run(&short_leaves()).unwrap();

        assert!(!report.matches());
        assert!(report.altered_leaves > 0);
    }

    #[test]
    fn hashed_leaves_survive_exact_decoding() {
        let options = TreeOptions::sorted().with_hashed_leaves(true);

        let keccak = RoundTrip::new(Keccak256Builder::new(options), TreeCodec::exact());
        assert!(keccak.run(&short_leaves()).unwrap().matches());

        let sha = RoundTrip::new(Sha256Builder::new(options), TreeCodec::exact());
        assert!(sha.run(&short_leaves()).unwrap().matches());

        let frontier = RoundTrip::new(FrontierBuilder::new(true), TreeCodec::exact());
        let report = frontier.run(&short_leaves()).unwrap();
        assert!(report.matches());
        assert_eq!(report.builder, "frontier");
    }

    #[test]
    fn exact_decoding_rejects_short_nodes() {
        let harness = RoundTrip::new(Keccak256Builder::default(), TreeCodec::exact());
        let err = harness.run(&short_leaves()).unwrap_err();
        assert!(matches!(err, RoundTripError::LeafWidth { len: 5, .. }));
        assert!(err.to_string().contains("hash the leaves"));
    }

    #[test]
    fn exact_decoding_accepts_full_width_nodes() {
        let leaves: Vec<Vec<u8>> = (1..=4u8).map(|i| vec![i; NODE_BYTES]).collect();
        let harness = RoundTrip::new(Sha256Builder::default(), TreeCodec::exact());
        let report = harness.run(&leaves).unwrap();
        assert!(report.matches());
        assert_eq!(report.altered_leaves, 0);
    }

    #[test]
    fn altered_count_ignores_resorting() {
        // The first leaf decodes to 02 00 01 and sorts after the second.
        let leaves = vec![
            vec![0x02, 0, 0, 0, 0, 0, 0, 0, 0x01],
            vec![0x02, 0, 0, 0x05],
        ];
        let harness = RoundTrip::new(Sha256Builder::default(), TreeCodec::legacy());
        let report = harness.run(&leaves).unwrap();

        assert!(!report.matches());
        assert_eq!(report.altered_leaves, 1);
    }

    #[test]
    fn empty_input() {
        let sorted = RoundTrip::new(Keccak256Builder::default(), TreeCodec::legacy());
        let report = sorted.run(&[]).unwrap();
        assert!(report.matches());
        assert_eq!(report.expected_root, "0x");

        let frontier = RoundTrip::new(FrontierBuilder::default(), TreeCodec::legacy());
        assert!(matches!(
            frontier.run(&[]),
            Err(RoundTripError::Tree(MerkleError::EmptyTree))
        ));
    }

    #[test]
    fn boxed_builders_work() {
        let builder: Box<dyn TreeBuilder> = Box::new(Sha256Builder::default());
        let harness = RoundTrip::new(builder, TreeCodec::legacy());
        assert!(harness.run(&short_leaves()).unwrap().matches());
    }
}
