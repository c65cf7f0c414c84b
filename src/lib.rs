//! MD5 Message-Digest
//!
//! A from-scratch implementation of the MD5 message-digest algorithm
//! (RFC 1321). The input string is hashed as its UTF-8 byte encoding and
//! the 128-bit digest is rendered as 32 lowercase hexadecimal characters.
//!
//! # Architecture
//!
//! - **Trait-Based**: HashAlgorithm trait for uniform interface
//! - **One Public Operation**: digest() is the only exported entry point
//! - **Substitutable Backend**: the `rustcrypto` feature swaps the
//!   from-scratch core for the RustCrypto `md-5` crate, with identical output
//!
//! # References
//!
//! - RFC 1321: https://datatracker.ietf.org/doc/html/rfc1321
//! - RustCrypto: https://github.com/RustCrypto

mod hash;

use hash::HashAlgorithm;

#[cfg(not(feature = "rustcrypto"))]
fn algorithm() -> &'static dyn HashAlgorithm {
    &hash::md5::Md5Algorithm
}

#[cfg(feature = "rustcrypto")]
fn algorithm() -> &'static dyn HashAlgorithm {
    &hash::rustcrypto::RustCryptoMd5
}

/// Compute the MD5 digest of `input`, returned as a 32-character lowercase
/// hex string.
///
/// The input is hashed as its UTF-8 byte encoding. Deterministic and
/// infallible for any valid string, including the empty string.
pub fn digest(input: &str) -> String {
    hex::encode(algorithm().hash(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_empty_string() {
        // RFC 1321 A.5: MD5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(digest(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let out = digest("hello");
        assert_eq!(out.len(), 32);
        assert!(out.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest("determinism"), digest("determinism"));
    }
}
