//! Equihash is a Proof-of-Work algorithm, based on a generalization of the Birthday
//! problem which finds colliding hash values. It was designed to be memory-hard; more
//! specifically, the bottle-neck for parallel implementations of Equihash solvers would
//! be memory bandwidth.
//!
//! This crate implements both sides of the scheme for any `(n, k)` with `1 <= k <= 7`
//! and a collision bit length `c = n / (k + 1)` between 1 and 32:
//!
//! - [`solve`] runs Wagner's algorithm over the `2^(c + 1)` leaves derived from a seed
//!   and nonce, retrying with the next nonce until a solution is found.
//! - [`verify`] replays the reduction over the `2^k` leaves of a [`Proof`].
//!
//! Leaf values are drawn from a BLAKE2b stream keyed by the parameters, the seed and
//! the nonce; see [`HashEngine`]. Solutions travel in their minimal encoding: `2^k`
//! indices of `c + 1` bits each, packed big-endian.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!
//! References
//! ==========
//! - Alex Biryukov and Dmitry Khovratovich.
//!   [*Equihash: Asymmetric Proof-of-Work Based on the Generalized Birthday Problem.*][BK16]
//!   NDSS ’16.
//! - David Wagner. *A Generalized Birthday Problem.* CRYPTO 2002.
//!
//! [BK16]: https://www.internetsociety.org/sites/default/files/blogs-media/equihash-asymmetric-proof-of-work-based-generalized-birthday-problem.pdf

// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, doc(auto_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate alloc;

use alloc::vec::Vec;

mod config;
mod error;
mod hash;
mod minimal;
mod params;
mod solver;
mod verify;

#[cfg(feature = "async")]
mod task;

#[cfg(test)]
mod test_vectors;

pub use config::{SolverConfig, DEFAULT_START_NONCE};
pub use error::{Error, ProofError};
pub use hash::{normalize_seed, HashEngine, NONCE_LENGTH, SEED_LENGTH};
pub use minimal::{indices_from_minimal, minimal_from_indices};
pub use params::{ParamError, Params, MAX_COLLISION_BIT_LENGTH, MAX_K};
pub use solver::{solutions, solve, solve_with_config, solve_with_nonce};
pub use verify::{is_valid_solution, verify};

#[cfg(feature = "async")]
pub use task::{solve_async, solve_with_config_async, verify_async};

/// A claimed Equihash solution together with the parameters and nonce it was found
/// for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub n: u32,
    pub k: u32,
    pub nonce: u32,
    /// The minimally-encoded solution.
    pub solution: Vec<u8>,
}

impl Proof {
    /// Validates this proof's parameters.
    pub fn params(&self) -> Result<Params, Error> {
        Params::new(self.n, self.k)
    }

    /// Decodes the solution into its leaf indices.
    pub fn indices(&self) -> Result<Vec<u64>, Error> {
        let p = self.params()?;
        Ok(indices_from_minimal(p, &self.solution)?)
    }
}
