//! Stable string hashing.
//!
//! Task fingerprints have to be reproducible: the same task identifier must
//! map to the same value in every process, on every platform. The standard
//! library's `DefaultHasher` is seeded per process, so values derived from it
//! would not survive a restart. Hashes here are taken from SHA-256 instead.

use sha2::{Digest, Sha256};

/// Hash a string to a stable 64-bit value.
///
/// The value is the big-endian interpretation of the first 8 bytes of the
/// SHA-256 digest of `input`. Identical inputs produce identical values
/// across runs and platforms.
pub fn stable_hash(input: &str) -> u64 {
  let mut hasher = Sha256::new();
  hasher.update(input.as_bytes());
  let digest = hasher.finalize();

  let mut prefix = [0u8; 8];
  prefix.copy_from_slice(&digest[..8]);
  u64::from_be_bytes(prefix)
}
