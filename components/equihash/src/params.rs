use core::fmt;

use crate::Error;

/// The largest supported number of rounds.
pub const MAX_K: u32 = 7;

/// The largest supported collision bit length.
pub const MAX_COLLISION_BIT_LENGTH: usize = 32;

/// Validated Equihash parameters.
///
/// Constructing a `Params` is the only way to obtain one, so every solver, verifier and
/// hash engine call operates on parameters that have already passed the bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    pub(crate) n: u32,
    pub(crate) k: u32,
}

/// The bound violated by a rejected `(n, k)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamError {
    /// `k` was zero.
    KTooSmall,
    /// `k` was larger than [`MAX_K`].
    KTooLarge(u32),
    /// `n / (k + 1)` was larger than [`MAX_COLLISION_BIT_LENGTH`].
    CollisionTooLong(usize),
    /// `n / (k + 1)` was zero.
    CollisionTooShort,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::KTooSmall => f.write_str("k must be at least 1"),
            ParamError::KTooLarge(k) => write!(f, "k = {} exceeds the maximum of {}", k, MAX_K),
            ParamError::CollisionTooLong(c) => write!(
                f,
                "collision bit length {} exceeds the maximum of {}",
                c, MAX_COLLISION_BIT_LENGTH
            ),
            ParamError::CollisionTooShort => f.write_str("collision bit length must be at least 1"),
        }
    }
}

impl Params {
    /// Validates `(n, k)`.
    ///
    /// We place the following requirements on the parameters:
    /// - 1 <= k <= 7, so a solution holds between 2 and 128 indices.
    /// - n / (k + 1) <= 32, so a collision digit fits in a `u32` and an index in 33 bits.
    /// - n / (k + 1) >= 1, so every round consumes at least one bit.
    pub fn new(n: u32, k: u32) -> Result<Self, Error> {
        if k < 1 {
            return Err(Error::InvalidParams(ParamError::KTooSmall));
        }
        if k > MAX_K {
            return Err(Error::InvalidParams(ParamError::KTooLarge(k)));
        }
        let c = (n / (k + 1)) as usize;
        if c > MAX_COLLISION_BIT_LENGTH {
            return Err(Error::InvalidParams(ParamError::CollisionTooLong(c)));
        }
        if c < 1 {
            return Err(Error::InvalidParams(ParamError::CollisionTooShort));
        }
        Ok(Params { n, k })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    /// The number of leading bits matched and consumed by each round.
    pub fn collision_bit_length(&self) -> usize {
        (self.n / (self.k + 1)) as usize
    }

    /// The width of a single index in the minimal encoding.
    pub fn index_bit_length(&self) -> usize {
        self.collision_bit_length() + 1
    }

    /// The number of leaves in the initial list, `2^(c + 1)`.
    pub fn leaf_count(&self) -> u64 {
        1 << self.index_bit_length()
    }

    /// The number of indices in a solution, `2^k`.
    pub fn solution_width(&self) -> usize {
        1 << self.k
    }

    /// The length in bytes of a minimally-encoded solution.
    pub fn minimal_length(&self) -> usize {
        (self.solution_width() * self.index_bit_length() + 7) / 8
    }

    /// The bits of the hash output left over after `k + 1` whole digits.
    pub(crate) fn remainder_bit_length(&self) -> usize {
        self.n as usize - (self.k as usize + 1) * self.collision_bit_length()
    }

    /// The number of digits a leaf value is split into: `k + 1` collision digits plus a
    /// trailing short digit when `n` is not a multiple of `k + 1`.
    pub(crate) fn digit_count(&self) -> usize {
        self.k as usize + 1 + usize::from(self.remainder_bit_length() > 0)
    }

    pub(crate) fn indices_per_hash_output(&self) -> u64 {
        u64::from(512 / self.n)
    }

    /// The length in bytes of the container returned for a single leaf value.
    pub(crate) fn hash_length(&self) -> usize {
        (self.n as usize + 7) / 8
    }
}
