//! SHA3-256 content hashing for deduplication
//!
//! Two files are only hashed when their sizes match; differing sizes settle
//! the question without reading any content.

use crate::error::{Error, Result};
use sha3::{Digest, Sha3_256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

/// Read buffer size for hashing (256KB)
const BUFFER_SIZE: usize = 256 * 1024;

/// Compute the SHA3-256 digest of a file's full contents, hex encoded
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut hasher = Sha3_256::new();

    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| Error::HashComputation {
                path: path.to_path_buf(),
                message: format!("Failed to read file: {}", e),
            })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let hash = hex::encode(hasher.finalize());
    trace!(?path, %hash, "Computed file hash");
    Ok(hash)
}

/// Check whether two files have byte-identical contents
pub fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    let size_a = std::fs::metadata(a)?.len();
    let size_b = std::fs::metadata(b)?.len();
    if size_a != size_b {
        trace!(?a, ?b, size_a, size_b, "Sizes differ, not hashing");
        return Ok(false);
    }

    Ok(compute_file_hash(a)? == compute_file_hash(b)?)
}
