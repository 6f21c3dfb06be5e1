//! Mixlane basic example
//!
//! Minimal usage: one call per digest width.

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), mixlane::Error> {
    let data = b"Hello, World!";

    let d32 = mixlane::hash32(data, 0)?;
    let d64 = mixlane::hash64(data, 0)?;

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Backend: {}", mixlane::active_backend());
    println!("32-bit:  {}", hex::encode(d32.to_be_bytes()));
    println!("64-bit:  {}", hex::encode(d64.to_be_bytes()));
    Ok(())
}
