//! Roundtrip command: random leaves through the wire format and back.

use super::{create_builder, create_codec};
use crate::{Decoding, HashKind};
use anyhow::{bail, Context, Result};
use limbwire::merkle::leaves::random_leaves;
use limbwire::RoundTrip;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Exact decoding restores 32-byte nodes only, so it always hashes leaves.
pub(super) fn hashes_leaves(decoding: Decoding, hash_leaves: bool) -> bool {
    hash_leaves || decoding == Decoding::Exact
}

pub fn roundtrip(
    hash: HashKind,
    decoding: Decoding,
    leaf_count: usize,
    leaf_len: usize,
    hash_leaves: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let leaves = random_leaves(&mut rng, leaf_count, leaf_len);

    let hashed = hashes_leaves(decoding, hash_leaves);
    if hashed && !hash_leaves {
        info!("Exact decoding needs 32-byte nodes; hashing leaves");
    }
    info!(leaves = leaf_count, length = leaf_len, hashed, "Generated random leaves");

    let harness = RoundTrip::new(create_builder(hash, hashed), create_codec(decoding));
    let report = harness.run(&leaves).context("Round trip failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Round trip with {} builder, {} decoding",
            report.builder,
            report.decoding.name()
        );
        println!("  Leaves: {}", report.leaves);
        println!("  Wire bytes: {}", report.wire_bytes);
        println!("  Expected root: {}", report.expected_root);
        println!("  Actual root:   {}", report.actual_root);
        if report.altered_leaves > 0 {
            println!("  Altered leaves: {}", report.altered_leaves);
        }
        println!();
    }

    if !report.matches() {
        bail!(
            "Roots differ after the round trip ({} of {} leaves altered by {} decoding)",
            report.altered_leaves,
            report.leaves,
            report.decoding.name()
        );
    }

    if !json {
        println!(
            "Roots match: the wire format kept the tree intact without relying on field or sequence order."
        );
    }
    Ok(())
}
