//! Mixlane CLI
//!
//! Hash files and verify digest lists with the runtime-dispatched backends.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{caps_mode, check_mode, hash_files, Width};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "mixlane")]
#[command(about = "Fast seeded hashing with runtime-dispatched SIMD backends", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest width in bits
    #[arg(short, long, value_enum, default_value_t = Width::W64)]
    width: Width,

    /// Seed, decimal or 0x-prefixed hex
    #[arg(short, long, value_parser = parse_seed, default_value = "0")]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Report processor capabilities and the selected backend
    Caps,
    /// Verify digests from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

fn parse_seed(s: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid seed '{s}': {e}"))
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Caps) => caps_mode()?,
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.seed)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: mixlane [FILE]... or mixlane --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.width, cli.seed)?;
        }
    }

    Ok(())
}
