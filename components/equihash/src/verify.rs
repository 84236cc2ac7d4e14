//! Verification functions for the Equihash proof-of-work algorithm.
//!
//! The verifier replays the solver's reduction bottom-up over the `2^k` leaves of a
//! claimed solution. Each round pairs adjacent subtrees, checks that their current
//! values agree on the next `c` bits and that the left subtree's first leaf precedes the
//! right subtree's first leaf, then replaces the pair with the XOR of their values.

use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::{hash::HashEngine, minimal::indices_from_minimal, params::Params, Error, Proof};

/// The reason a structurally valid solution was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Kind {
    Collision,
    OutOfOrder,
    DuplicateIdxs,
    NonZeroRootHash,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Collision => f.write_str("adjacent subtrees do not collide"),
            Kind::OutOfOrder => f.write_str("subtrees are out of order"),
            Kind::DuplicateIdxs => f.write_str("duplicate indices"),
            Kind::NonZeroRootHash => f.write_str("root hash of tree is non-zero"),
        }
    }
}

/// Replays the reduction over `indices`, which must hold exactly `2^k` in-range leaves.
pub(crate) fn check_indices(p: Params, engine: &HashEngine, indices: &[u64]) -> Result<(), Kind> {
    debug_assert_eq!(indices.len(), p.solution_width());

    let mut stride = p.digit_count();
    let mut rows = Vec::with_capacity(indices.len() * stride);
    for &i in indices {
        engine.digits(i, &mut rows);
    }

    // `span` is the number of leaves under each row of the current round.
    let mut span = 1;
    while rows.len() > stride {
        let mut next = Vec::with_capacity(rows.len() / 2);
        for (j, pair) in rows.chunks_exact(2 * stride).enumerate() {
            let (a, b) = pair.split_at(stride);
            if a[0] != b[0] {
                return Err(Kind::Collision);
            }
            if indices[2 * j * span] >= indices[(2 * j + 1) * span] {
                return Err(Kind::OutOfOrder);
            }
            next.extend(a[1..].iter().zip(&b[1..]).map(|(x, y)| x ^ y));
        }
        rows = next;
        stride -= 1;
        span *= 2;
    }

    if rows.iter().any(|d| *d != 0) {
        return Err(Kind::NonZeroRootHash);
    }

    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(Kind::DuplicateIdxs);
    }

    Ok(())
}

fn check_solution(
    p: Params,
    seed: &[u8],
    nonce: u32,
    soln: &[u8],
) -> Result<Result<(), Kind>, Error> {
    let indices = indices_from_minimal(p, soln)?;
    let engine = HashEngine::new(p, seed, nonce);
    Ok(check_indices(p, &engine, &indices))
}

/// Checks whether `soln` is a valid minimally-encoded solution for `(seed, nonce)` with
/// the parameters `(n, k)`.
///
/// Returns an error if the parameters are invalid or `soln` cannot be decoded, and
/// `Ok(false)` if it decodes but does not satisfy the Equihash conditions.
pub fn is_valid_solution(
    n: u32,
    k: u32,
    seed: &[u8],
    nonce: u32,
    soln: &[u8],
) -> Result<bool, Error> {
    let p = Params::new(n, k)?;
    match check_solution(p, seed, nonce, soln)? {
        Ok(()) => Ok(true),
        Err(kind) => {
            debug!("Rejected Equihash solution for n={}, k={}: {}", n, k, kind);
            Ok(false)
        }
    }
}

/// Checks `proof` against `seed`.
pub fn verify(seed: &[u8], proof: &Proof) -> Result<bool, Error> {
    is_valid_solution(proof.n, proof.k, seed, proof.nonce, &proof.solution)
}
