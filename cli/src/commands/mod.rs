//! CLI Commands
//!
//! All mixlane CLI commands organized as separate modules.

mod caps;
mod check;
mod hash;

pub use caps::caps_mode;
pub use check::check_mode;
pub use hash::{hash_files, Width};
