// crates/infra/src/hashing.rs
use cloc_runner_ports::{HashValue, Hasher};
use cloc_runner_shared_kernel::Result;
use xxhash_rust::xxh3::xxh3_128;

/// Stable, cross-process content fingerprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher;

impl Hasher for Xxh3Hasher {
    fn hash_bytes(&self, data: &[u8]) -> Result<HashValue> {
        Ok(HashValue(xxh3_128(data)))
    }
}
