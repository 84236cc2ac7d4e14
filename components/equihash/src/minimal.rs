use alloc::vec::Vec;
use core::cmp::min;

use crate::{params::Params, ProofError};

/// Reads big-endian bit fields from a byte slice, most significant bit first.
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self::at(bytes, 0)
    }

    /// Starts reading at the given bit offset into `bytes`.
    pub(crate) fn at(bytes: &'a [u8], pos: usize) -> Self {
        BitReader { bytes, pos }
    }

    /// Reads the next `bit_len` bits as an unsigned integer.
    ///
    /// Panics if fewer than `bit_len` bits remain.
    pub(crate) fn read(&mut self, bit_len: usize) -> u64 {
        debug_assert!(bit_len <= 64);

        let mut acc = 0u64;
        let mut remaining = bit_len;
        while remaining > 0 {
            let offset = self.pos % 8;
            let available = 8 - offset;
            let take = min(available, remaining);
            let chunk = (self.bytes[self.pos / 8] >> (available - take)) & (0xff >> (8 - take));
            acc = (acc << take) | u64::from(chunk);
            self.pos += take;
            remaining -= take;
        }
        acc
    }

    /// The number of unread bits.
    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }
}

/// Appends big-endian bit fields to a byte buffer. The final partial byte, if any, is
/// padded with zeroes.
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    bits: usize,
}

impl BitWriter {
    pub(crate) fn with_capacity(byte_len: usize) -> Self {
        BitWriter {
            bytes: Vec::with_capacity(byte_len),
            bits: 0,
        }
    }

    /// Writes the low `bit_len` bits of `value`.
    pub(crate) fn write(&mut self, value: u64, bit_len: usize) {
        debug_assert!(bit_len <= 64);

        let mut remaining = bit_len;
        while remaining > 0 {
            let used = self.bits % 8;
            if used == 0 {
                self.bytes.push(0);
            }
            let free = 8 - used;
            let take = min(free, remaining);
            let chunk = ((value >> (remaining - take)) as u8) & (0xff >> (8 - take));
            let last = self.bytes.len() - 1;
            self.bytes[last] |= chunk << (free - take);
            self.bits += take;
            remaining -= take;
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Packs a solution's indices into their minimal encoding: `2^k` fields of `c + 1`
/// bits each, big-endian, zero-padded to a whole number of bytes.
pub fn minimal_from_indices(p: Params, indices: &[u64]) -> Vec<u8> {
    debug_assert_eq!(indices.len(), p.solution_width());

    let bit_len = p.index_bit_length();
    let mut writer = BitWriter::with_capacity(p.minimal_length());
    for &i in indices {
        debug_assert!(i < p.leaf_count());
        writer.write(i, bit_len);
    }
    writer.finish()
}

/// Unpacks a minimally-encoded solution into its `2^k` indices.
pub fn indices_from_minimal(p: Params, minimal: &[u8]) -> Result<Vec<u64>, ProofError> {
    if minimal.len() != p.minimal_length() {
        return Err(ProofError::InvalidLength {
            expected: p.minimal_length(),
            actual: minimal.len(),
        });
    }

    let bit_len = p.index_bit_length();
    let leaf_count = p.leaf_count();
    let mut reader = BitReader::new(minimal);
    let mut ret = Vec::with_capacity(p.solution_width());
    for _ in 0..p.solution_width() {
        let index = reader.read(bit_len);
        if index >= leaf_count {
            return Err(ProofError::IndexOutOfRange { index, leaf_count });
        }
        ret.push(index);
    }

    // Every bit of the encoding must be significant.
    let padding = reader.remaining();
    if reader.read(padding) != 0 {
        return Err(ProofError::NonZeroPadding);
    }

    Ok(ret)
}
