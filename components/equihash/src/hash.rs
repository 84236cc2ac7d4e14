//! The keyed hash stream from which leaf values are drawn.
//!
//! Every leaf value is an `n`-bit slice of a BLAKE2b output stream. The stream is keyed
//! by a personalization binding `(n, k)`, the normalized seed and the nonce:
//!
//! ```text
//! personal = "Equihash" || LE32(n) || LE32(k)
//! key      = BLAKE2b-512[personal](seed' || LE32(nonce))
//! block(b) = key || LE64(b)
//! ```
//!
//! Each 512-bit block holds `floor(512 / n)` consecutive leaf values, packed
//! most-significant-bit first; the remaining bits of the block are discarded.

use alloc::vec::Vec;

use blake2b_simd::{Hash as Blake2bHash, Params as Blake2bParams, State as Blake2bState, OUTBYTES};
use byteorder::{ByteOrder, LittleEndian};

use crate::{
    minimal::{BitReader, BitWriter},
    params::Params,
};

/// The width that seeds are normalized to before being absorbed into the hash key.
pub const SEED_LENGTH: usize = 64;

/// The length of the little-endian nonce encoding absorbed after the seed.
pub const NONCE_LENGTH: usize = 4;

const PERSONALIZATION_PREFIX: &[u8; 8] = b"Equihash";
const SEED_PERSONALIZATION: &[u8; 16] = b"EquihashSeedNorm";

/// Brings a seed of any length to exactly [`SEED_LENGTH`] bytes.
///
/// Short seeds are zero-padded on the right. Longer seeds are replaced by their
/// BLAKE2b-512 digest.
pub fn normalize_seed(seed: &[u8]) -> [u8; SEED_LENGTH] {
    let mut normalized = [0u8; SEED_LENGTH];
    if seed.len() > SEED_LENGTH {
        let digest = Blake2bParams::new()
            .hash_length(SEED_LENGTH)
            .personal(SEED_PERSONALIZATION)
            .hash(seed);
        normalized.copy_from_slice(digest.as_bytes());
    } else {
        normalized[..seed.len()].copy_from_slice(seed);
    }
    normalized
}

pub(crate) fn initialise_state(p: Params) -> Blake2bState {
    let mut personalization = [0u8; 16];
    personalization[..8].copy_from_slice(PERSONALIZATION_PREFIX);
    LittleEndian::write_u32(&mut personalization[8..12], p.n);
    LittleEndian::write_u32(&mut personalization[12..16], p.k);

    Blake2bParams::new()
        .hash_length(OUTBYTES)
        .personal(&personalization)
        .to_state()
}

/// Derives leaf values for a fixed `(seed, nonce, n, k)`.
///
/// The engine holds no mutable state: two engines built from the same inputs return the
/// same value for every index.
#[derive(Clone)]
pub struct HashEngine {
    p: Params,
    state: Blake2bState,
}

impl HashEngine {
    pub fn new(p: Params, seed: &[u8], nonce: u32) -> Self {
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        LittleEndian::write_u32(&mut nonce_bytes, nonce);

        let mut state = initialise_state(p);
        state.update(&normalize_seed(seed));
        state.update(&nonce_bytes);
        HashEngine { p, state }
    }

    pub fn params(&self) -> Params {
        self.p
    }

    fn generate_hash(&self, block: u64) -> Blake2bHash {
        let mut leb = [0u8; 8];
        LittleEndian::write_u64(&mut leb, block);

        let mut state = self.state.clone();
        state.update(&leb);
        state.finalize()
    }

    fn locate(&self, i: u64) -> (Blake2bHash, usize) {
        let per_block = self.p.indices_per_hash_output();
        let hash = self.generate_hash(i / per_block);
        let offset = (i % per_block) as usize * self.p.n as usize;
        (hash, offset)
    }

    /// Returns the `n`-bit value of leaf `i`, right-aligned in the smallest whole number
    /// of bytes.
    pub fn derive(&self, i: u64) -> Vec<u8> {
        debug_assert!(i < self.p.leaf_count());

        let (hash, offset) = self.locate(i);
        let mut reader = BitReader::at(hash.as_bytes(), offset);
        let mut writer = BitWriter::with_capacity(self.p.hash_length());
        writer.write(0, self.p.hash_length() * 8 - self.p.n as usize);

        let mut remaining = self.p.n as usize;
        while remaining > 0 {
            let take = remaining.min(32);
            writer.write(reader.read(take), take);
            remaining -= take;
        }
        writer.finish()
    }

    /// Appends the digits of leaf `i` to `out`.
    pub(crate) fn digits(&self, i: u64, out: &mut Vec<u32>) {
        let (hash, offset) = self.locate(i);
        split_digits(self.p, hash.as_bytes(), offset, out);
    }

    /// Appends the digits of every leaf, in index order, to `out`.
    ///
    /// This hashes each block once rather than once per index.
    pub(crate) fn all_digits(&self, out: &mut Vec<u32>) {
        let per_block = self.p.indices_per_hash_output();
        let leaf_count = self.p.leaf_count();
        let n = self.p.n as usize;

        let mut i = 0;
        let mut block = 0;
        while i < leaf_count {
            let hash = self.generate_hash(block);
            for slot in 0..per_block.min(leaf_count - i) {
                split_digits(self.p, hash.as_bytes(), slot as usize * n, out);
            }
            i += per_block;
            block += 1;
        }
    }
}

/// Splits the `n` bits at `offset` into `k + 1` collision digits and an optional short
/// trailing digit.
fn split_digits(p: Params, hash: &[u8], offset: usize, out: &mut Vec<u32>) {
    let c = p.collision_bit_length();
    let mut reader = BitReader::at(hash, offset);
    for _ in 0..=p.k {
        out.push(reader.read(c) as u32);
    }
    let remainder = p.remainder_bit_length();
    if remainder > 0 {
        out.push(reader.read(remainder) as u32);
    }
}
