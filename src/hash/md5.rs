//! MD5 (RFC 1321), implemented from scratch.
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc1321

use crate::hash::{HashAlgorithm, HashState};

/// Per-round left-rotation amounts, four repeating groups of 16.
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20, 5,  9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// T[i] = floor(|sin(i + 1)| * 2^32), per RFC 1321 section 3.4.
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Initial values for the A, B, C, D registers.
const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

pub struct Md5Algorithm;

impl HashAlgorithm for Md5Algorithm {
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
        Box::new(Md5State::new())
    }
}

struct Md5State {
    message: Vec<u8>,
}

impl Md5State {
    fn new() -> Self {
        Self {
            message: Vec::new(),
        }
    }
}

impl HashState for Md5State {
    fn update(&mut self, data: &[u8]) {
        self.message.extend_from_slice(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        let padded = pad(&self.message);

        let mut state = INIT;
        for block in padded.chunks_exact(64) {
            transform(&mut state, block);
        }

        let mut digest = Vec::with_capacity(16);
        for word in state {
            digest.extend_from_slice(&word.to_le_bytes());
        }
        digest
    }
}

/// Pad `message` per RFC 1321: a 0x80 byte, zeros until the length is
/// 56 mod 64, then the original bit length as a 64-bit little-endian
/// integer. The bit length wraps modulo 2^64.
fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(message.len() + 72);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % 64 != 56 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_le_bytes());
    padded
}

/// Run the 64-round compression function over one 64-byte block.
fn transform(state: &mut [u32; 4], block: &[u8]) {
    // Sixteen 32-bit little-endian message words.
    let mut m = [0u32; 16];
    for (j, word) in block.chunks_exact(4).enumerate() {
        m[j] = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let rotated = f
            .wrapping_add(a)
            .wrapping_add(T[i])
            .wrapping_add(m[g])
            .rotate_left(S[i]);
        let new_b = b.wrapping_add(rotated);

        a = d;
        d = c;
        c = b;
        b = new_b;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
