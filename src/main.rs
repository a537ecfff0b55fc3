//! wordroot CLI - Command line interface for wordroot
//!
//! Computes and checks merkle root digests over newline-separated word
//! files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordroot::{words, Digest, MerkleTree};

#[derive(Parser)]
#[command(name = "wordroot")]
#[command(about = "Merkle tree summary hashes for ordered word lists")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log tree construction to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the merkle root of a word file
    Root {
        /// Path to a newline-separated word file
        file: PathBuf,
    },

    /// Hash a single value (a one-leaf tree)
    Hash {
        /// The value to hash
        value: String,
    },

    /// Rebuild a word file's tree and compare against an expected root
    Verify {
        /// Path to a newline-separated word file
        file: PathBuf,
        /// Expected root digest, 64 hex characters
        expected: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Root { file } => {
            let tree = build_tree(&file)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "file": file.display().to_string(),
                    "root": tree.root_hex(),
                    "leaves": tree.leaf_count(),
                    "nodes": tree.node_count(),
                    "height": tree.height()
                }),
            );
        }

        Commands::Hash { value } => {
            let digest = Digest::digest(value.as_bytes());
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "digest": digest.to_hex()
                }),
            );
        }

        Commands::Verify { file, expected } => {
            let expected = Digest::from_hex(&expected)?;
            let tree = build_tree(&file)?;
            let matches = tree.root_digest() == expected;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": if matches { "ok" } else { "mismatch" },
                    "file": file.display().to_string(),
                    "root": tree.root_hex(),
                    "expected": expected.to_hex()
                }),
            );
            if !matches {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn build_tree(file: &PathBuf) -> anyhow::Result<MerkleTree> {
    let words = words::load(file)?;
    let tree = MerkleTree::build(&words)?;
    Ok(tree)
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
