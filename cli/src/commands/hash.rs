//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Width {
    /// 32-bit digest
    #[value(name = "32")]
    W32,
    /// 64-bit digest
    #[value(name = "64")]
    W64,
}

impl Width {
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

/// Render a digest at the width it was computed with.
pub fn format_digest(digest: u64, width: Width) -> String {
    match width {
        Width::W32 => hex::encode((digest as u32).to_be_bytes()),
        Width::W64 => hex::encode(digest.to_be_bytes()),
    }
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], width: Width, seed: u64) -> Result<()> {
    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let data = std::fs::read(file_path)
                .with_context(|| format!("Failed to read: {}", file_path.display()))?;
            let digest = mixlane::compute(&data, seed, width.bits())?;
            Ok(format_digest(digest, width))
        })();

        match result {
            Ok(hex_digest) => {
                results.lock().unwrap().push((file_path.clone(), hex_digest));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_digest) in results {
        println!("{}  {}", hex_digest, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
