//! Check Command
//!
//! Verify digests from a checksum file (like sha256sum -c).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::hash::{format_digest, Width};

// =============================================================================
// CHECK
// =============================================================================

/// Verify digests from a checksum file.
///
/// The digest column picks the width: 8 hex digits verify the 32-bit hash,
/// 16 the 64-bit one. Lines must use the same seed the digests were made with.
pub fn check_mode(checksum_file: &PathBuf, seed: u64) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "digest  filename" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            eprintln!("Warning: Invalid format: {}", line);
            continue;
        }

        let expected = parts[0].trim();
        let file_path = parts[1].trim();

        let width = match expected.len() {
            8 => Width::W32,
            16 => Width::W64,
            _ => {
                eprintln!("Warning: Unrecognized digest length: {}", line);
                continue;
            }
        };
        total += 1;

        match std::fs::read(file_path) {
            Ok(data) => match mixlane::compute(&data, seed, width.bits()) {
                Ok(digest) => {
                    if format_digest(digest, width).eq_ignore_ascii_case(expected) {
                        println!("{}: OK", file_path);
                    } else {
                        println!("{}: FAILED", file_path);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("{}: FAILED ({})", file_path, e);
                    failed += 1;
                }
            },
            Err(e) => {
                println!("{}: FAILED ({})", file_path, e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {} digests verified", total);
    } else {
        eprintln!("WARNING: {} of {} digests did NOT match", failed, total);
        std::process::exit(1);
    }

    Ok(())
}
