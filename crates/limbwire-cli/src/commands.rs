//! Command implementations for the limbwire CLI.

mod decode;
mod encode;
mod roundtrip;

pub use decode::decode;
pub use encode::encode;
pub use roundtrip::roundtrip;

use crate::{Decoding, HashKind};
use anyhow::{anyhow, Result};
use limbwire::core::limb::{limbs_to_uint256_exact, numeric_hex_to_limbs, try_uint256_to_limbs};
use limbwire::core::{limbs_to_uint256, LimbDecoding, TreeCodec, U512};
use limbwire::merkle::{
    FrontierBuilder, Keccak256Builder, Sha256Builder, TreeBuilder, TreeOptions,
};
use tracing::debug;

/// Create a tree builder.
fn create_builder(hash: HashKind, hash_leaves: bool) -> Box<dyn TreeBuilder> {
    let options = TreeOptions::sorted().with_hashed_leaves(hash_leaves);
    match hash {
        HashKind::Keccak => Box::new(Keccak256Builder::new(options)),
        HashKind::Sha256 => Box::new(Sha256Builder::new(options)),
        HashKind::Frontier => Box::new(FrontierBuilder::new(hash_leaves)),
    }
}

fn limb_decoding(decoding: Decoding) -> LimbDecoding {
    match decoding {
        Decoding::Legacy => LimbDecoding::Legacy,
        Decoding::Exact => LimbDecoding::Exact,
    }
}

fn create_codec(decoding: Decoding) -> TreeCodec {
    TreeCodec::new(limb_decoding(decoding))
}

/// Limbs command: show how an integer is split and folded back.
pub fn limbs(value: &str) -> Result<()> {
    let limbs = if value.starts_with("0x") {
        numeric_hex_to_limbs(value)?
    } else {
        let wide = U512::from_dec_str(value)
            .map_err(|e| anyhow!("Invalid decimal value '{}': {:?}", value, e))?;
        try_uint256_to_limbs(wide)?
    };

    debug!(?limbs, "Split value");
    println!("Value: {}", value);
    println!("  part4: {:#018x}", limbs.part4);
    println!("  part3: {:#018x}", limbs.part3);
    println!("  part2: {:#018x}", limbs.part2);
    println!("  part1: {:#018x}", limbs.part1);
    println!();

    let legacy = limbs_to_uint256(&limbs);
    let exact = limbs_to_uint256_exact(&limbs);
    println!("Legacy decoding: {} ({:#x})", legacy, legacy);
    println!("Exact decoding:  {} ({:#x})", exact, exact);
    if legacy != exact {
        println!();
        println!("Legacy decoding does not reproduce this value.");
    }

    Ok(())
}
