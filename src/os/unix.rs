//! Unix-specific operating system features.

use nix::unistd::{AccessFlags, access};
use std::path::Path;

/// Check write permission the way the kernel would for this process.
pub fn is_writable(path: &Path) -> bool {
    access(path, AccessFlags::W_OK).is_ok()
}
