//! Encode command: leaf file to protobuf `Tree` bytes.

use super::create_builder;
use crate::HashKind;
use anyhow::{Context, Result};
use limbwire::core::{wire, TreeCodec};
use std::fs;
use tracing::info;
use std::path::Path;

/// Read leaves from text, one per line. Blank lines are skipped.
pub(super) fn parse_leaves(text: &str, hex_input: bool) -> Result<Vec<Vec<u8>>> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| {
            if hex_input {
                let digits = line.strip_prefix("0x").unwrap_or(line);
                hex::decode(digits).with_context(|| format!("Leaf {} is not valid hex", i))
            } else {
                Ok(line.as_bytes().to_vec())
            }
        })
        .collect()
}

pub fn encode(
    input: &Path,
    output: Option<&Path>,
    hash: HashKind,
    hash_leaves: bool,
    hex_input: bool,
) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read leaves from {}", input.display()))?;
    let leaves = parse_leaves(&text, hex_input)?;
    info!(leaves = leaves.len(), input = %input.display(), "Read leaves");

    let builder = create_builder(hash, hash_leaves);
    let tree = builder.build(&leaves)?;

    // Decoding mode plays no part in encoding
    let message = TreeCodec::default().encode(&tree.hex_root(), &tree.hex_leaves())?;
    let bytes = wire::encode_tree(&message);

    match output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Encoded {} leaves with {} builder", tree.len(), builder.name());
            println!("  Root: {}", tree.hex_root());
            println!("  Wire bytes: {}", bytes.len());
            println!("  Output: {}", path.display());
        }
        None => println!("{}", hex::encode(&bytes)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_leaves_skip_blank_lines() {
        let leaves = parse_leaves("alpha\r\n\nbeta\n", false).unwrap();
        assert_eq!(leaves, vec![b"alpha".to_vec(), b"beta".to_vec()]);
    }

    #[test]
    fn hex_leaves_are_decoded() {
        let leaves = parse_leaves("0x0102\nff\n", true).unwrap();
        assert_eq!(leaves, vec![vec![1, 2], vec![0xff]]);
        assert!(parse_leaves("abc\n", true).is_err());
    }
}
