//! Hashing backends behind a uniform trait interface.
//!
//! The from-scratch RFC 1321 implementation in [`md5`] is the canonical
//! backend. With the `rustcrypto` feature the [`rustcrypto`] adapter is
//! compiled in instead; selection happens at compile time in the crate
//! root, so exactly one backend exists per build.

pub mod md5;
#[cfg(feature = "rustcrypto")]
pub mod rustcrypto;

/// Unified trait for hash algorithm backends.
pub trait HashAlgorithm: Send + Sync {
    /// Algorithm name (lowercase)
    fn name(&self) -> &'static str;

    /// Output size in bytes
    fn output_size(&self) -> usize;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Create a new hasher instance
    fn new_hasher(&self) -> Box<dyn HashState>;

    /// One-shot hash computation
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.new_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

/// State for an in-progress hash computation.
pub trait HashState: Send {
    /// Update hash state with data
    fn update(&mut self, data: &[u8]);

    /// Finalize and return digest
    fn finalize(self: Box<Self>) -> Vec<u8>;
}
