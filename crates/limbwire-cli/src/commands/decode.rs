//! Decode command: protobuf `Tree` bytes to an ordered leaf list.

use super::{create_builder, create_codec};
use crate::{Decoding, HashKind};
use anyhow::{Context, Result};
use limbwire::core::wire;
use limbwire::merkle::rebuild_from_hex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct DecodedTree {
    decoding: &'static str,
    root: Option<String>,
    leaves: Vec<Option<String>>,
    holes: Vec<usize>,
    rebuilt_root: Option<String>,
}

fn read_bytes(input: &Path, hex_input: bool) -> Result<Vec<u8>> {
    if hex_input {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        hex::decode(text.trim()).context("Input is not valid hex")
    } else {
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))
    }
}

pub fn decode(
    input: &Path,
    hex_input: bool,
    decoding: Decoding,
    verify: Option<HashKind>,
    json: bool,
) -> Result<()> {
    let bytes = read_bytes(input, hex_input)?;
    info!(bytes = bytes.len(), input = %input.display(), "Read tree bytes");
    let codec = create_codec(decoding);

    let tree = wire::decode_tree(&bytes).context("Failed to deserialize tree")?;
    let root = tree.root.is_some().then(|| codec.decode_root(&tree)).transpose()?;
    let sequence = codec.decode(&tree)?;
    let holes: Vec<usize> = sequence.holes().collect();

    let rebuilt_root = match verify {
        Some(hash) => {
            let builder = create_builder(hash, false);
            let leaves = sequence
                .clone()
                .into_complete()
                .context("Cannot rebuild a tree with missing leaves")?;
            Some(rebuild_from_hex(&builder, &leaves)?.hex_root())
        }
        None => None,
    };

    let decoded = DecodedTree {
        decoding: codec.decoding().name(),
        root,
        leaves: sequence.into_inner(),
        holes,
        rebuilt_root,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    println!("Decoded {} leaves ({} decoding)", decoded.leaves.len(), decoded.decoding);
    println!("  Root: {}", decoded.root.as_deref().unwrap_or("<missing>"));
    if let Some(rebuilt) = &decoded.rebuilt_root {
        println!("  Rebuilt root: {}", rebuilt);
    }
    if !decoded.holes.is_empty() {
        println!("  Holes: {:?}", decoded.holes);
    }
    println!();

    for (position, leaf) in decoded.leaves.iter().enumerate() {
        println!("  [{}] {}", position, leaf.as_deref().unwrap_or("<missing>"));
    }

    Ok(())
}
