//! MD5 backend delegating to the RustCrypto `md-5` crate.
//!
//! Compiled only with the `rustcrypto` feature, which selects it in place
//! of the from-scratch core. Output is bit-identical either way.

use crate::hash::{HashAlgorithm, HashState};
use digest::Digest;
use md5::Md5;

pub struct RustCryptoMd5;

impl HashAlgorithm for RustCryptoMd5 {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn output_size(&self) -> usize {
        16 // 128 bits
    }

    fn block_size(&self) -> usize {
        64 // 512 bits
    }

    fn new_hasher(&self) -> Box<dyn HashState> {
        Box::new(RustCryptoState { inner: Md5::new() })
    }
}

struct RustCryptoState {
    inner: Md5,
}

impl HashState for RustCryptoState {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.inner.finalize().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::md5::Md5Algorithm;

    #[test]
    fn test_backends_agree() {
        for input in ["", "a", "abc", "message digest", "hello world"] {
            assert_eq!(
                RustCryptoMd5.hash(input.as_bytes()),
                Md5Algorithm.hash(input.as_bytes()),
                "input {:?}",
                input
            );
        }
    }
}
