//! CLI tool for limbwire.
//!
//! Provides commands for encoding Merkle trees to the four-limb wire format,
//! decoding them back, and checking that roots survive the round trip.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "limbwire")]
#[command(about = "Four-limb wire encoding for Merkle trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Build a tree from random leaves and push it through the wire format
    Roundtrip {
        /// Number of leaves to generate
        #[arg(long, default_value_t = 100)]
        leaves: usize,

        /// Length of each generated leaf in bytes
        #[arg(long, default_value_t = 5)]
        length: usize,

        /// Tree builder to use
        #[arg(long, value_enum, default_value = "keccak")]
        hash: HashKind,

        /// How limbs are folded back into integers
        #[arg(long, value_enum, default_value = "legacy")]
        decoding: Decoding,

        /// Hash leaves before they enter the tree
        #[arg(long)]
        hash_leaves: bool,

        /// Seed for reproducible leaves
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode a tree built from a file of leaves (one per line)
    Encode {
        /// Leaf file
        #[arg(long, short)]
        input: PathBuf,

        /// Output file for protobuf bytes (hex to stdout if not given)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Tree builder to use
        #[arg(long, value_enum, default_value = "keccak")]
        hash: HashKind,

        /// Hash leaves before they enter the tree
        #[arg(long)]
        hash_leaves: bool,

        /// Input lines are hex-encoded leaves
        #[arg(long)]
        hex: bool,
    },

    /// Decode protobuf bytes back into an ordered leaf list
    Decode {
        /// File with protobuf bytes
        #[arg(long, short)]
        input: PathBuf,

        /// Input file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// How limbs are folded back into integers
        #[arg(long, value_enum, default_value = "legacy")]
        decoding: Decoding,

        /// Rebuild the tree with this builder and compare roots
        #[arg(long, value_enum)]
        verify: Option<HashKind>,

        /// Print the decoded tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the limb split of an integer
    Limbs {
        /// Decimal value or `0x`-prefixed hex
        value: String,
    },
}

/// Available tree builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HashKind {
    /// Sorted-pair tree with Keccak-256 (default)
    Keccak,
    /// Sorted-pair tree with SHA-256
    Sha256,
    /// Append-only depth-32 tree with SHA-256
    Frontier,
}

/// Limb decodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Decoding {
    /// 16-bit shifts, compatible with deployed decoders (default)
    Legacy,
    /// 64-bit shifts, exact inverse of encoding
    Exact,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Roundtrip {
            leaves,
            length,
            hash,
            decoding,
            hash_leaves,
            seed,
            json,
        } => commands::roundtrip(hash, decoding, leaves, length, hash_leaves, seed, json),
        Commands::Encode {
            input,
            output,
            hash,
            hash_leaves,
            hex,
        } => commands::encode(&input, output.as_deref(), hash, hash_leaves, hex),
        Commands::Decode {
            input,
            hex,
            decoding,
            verify,
            json,
        } => commands::decode(&input, hex, decoding, verify, json),
        Commands::Limbs { value } => commands::limbs(&value),
    }
}
