//! A pure-Rust Equihash solver based on Wagner's algorithm.
//!
//! Each attempt builds the list of all `2^(c + 1)` leaves for a fixed nonce, then runs
//! `k` rounds. A round groups the current list by the leading digit of each element and
//! combines every pair within a group whose subtrees are in canonical order and share
//! no leaf. The combined element keeps the XOR of the pair's remaining digits, minus the
//! digit they collided on. After round `k`, every element whose remaining digits are all
//! zero is a solution.
//!
//! Rounds are flat list transformations. Only the back-references from each round to its
//! predecessor outlive the round; the predecessor's digits are dropped as soon as the
//! next list has been built.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::Range;

use tracing::{debug, trace};

use crate::{
    config::SolverConfig, hash::HashEngine, minimal::minimal_from_indices, params::Params, Error,
    Proof,
};

/// The elements of one round's list, stored as parallel flat arrays.
struct Layer {
    /// The remaining digits of each element, `stride` per element.
    digits: Vec<u32>,
    stride: usize,
    /// The first leaf of each element's subtree, which is also its smallest leaf.
    first: Vec<u64>,
}

impl Layer {
    fn initial(p: Params, engine: &HashEngine) -> Self {
        let stride = p.digit_count();
        let leaf_count = p.leaf_count();
        let mut digits = Vec::with_capacity(leaf_count as usize * stride);
        engine.all_digits(&mut digits);
        Layer {
            digits,
            stride,
            first: (0..leaf_count).collect(),
        }
    }

    fn len(&self) -> usize {
        self.first.len()
    }

    fn row(&self, pos: usize) -> &[u32] {
        &self.digits[pos * self.stride..(pos + 1) * self.stride]
    }

    fn key(&self, pos: usize) -> u32 {
        self.digits[pos * self.stride]
    }
}

/// For every round `r >= 1`, the pair of round `r - 1` positions each element was built
/// from. Round 0 positions are leaf indices.
struct Tree {
    links: Vec<Vec<(usize, usize)>>,
}

impl Tree {
    /// Appends the leaves under `pos` in round `round` to `out`, left subtree first.
    fn leaves(&self, round: usize, pos: usize, out: &mut Vec<u64>) {
        let mut stack = vec![(round, pos)];
        while let Some((r, p)) = stack.pop() {
            if r == 0 {
                out.push(p as u64);
            } else {
                let (a, b) = self.links[r - 1][p];
                stack.push((r - 1, b));
                stack.push((r - 1, a));
            }
        }
    }

    fn disjoint(
        &self,
        round: usize,
        a: usize,
        b: usize,
        left: &mut Vec<u64>,
        right: &mut Vec<u64>,
    ) -> bool {
        left.clear();
        right.clear();
        self.leaves(round, a, left);
        self.leaves(round, b, right);
        left.sort_unstable();
        !right.iter().any(|i| left.binary_search(i).is_ok())
    }
}

/// Builds the next round's list from `layer`, recording back-references in `tree`.
fn collide(layer: Layer, tree: &mut Tree) -> Layer {
    let round = tree.links.len() + 1;

    let mut order: Vec<usize> = (0..layer.len()).collect();
    order.sort_by_key(|&pos| layer.key(pos));

    let mut digits = Vec::with_capacity(layer.digits.len());
    let mut first = Vec::with_capacity(layer.len());
    let mut links = Vec::with_capacity(layer.len());
    let (mut left, mut right) = (Vec::new(), Vec::new());

    for bucket in order.chunk_by(|&x, &y| layer.key(x) == layer.key(y)) {
        for (j, &x) in bucket.iter().enumerate() {
            for &y in &bucket[j + 1..] {
                let (a, b) = match layer.first[x].cmp(&layer.first[y]) {
                    Ordering::Less => (x, y),
                    Ordering::Greater => (y, x),
                    Ordering::Equal => continue,
                };
                // Leaves are distinct at round 1, so only deeper subtrees can overlap.
                if round > 1 && !tree.disjoint(round - 1, a, b, &mut left, &mut right) {
                    continue;
                }
                digits.extend(
                    layer.row(a)[1..]
                        .iter()
                        .zip(&layer.row(b)[1..])
                        .map(|(u, v)| u ^ v),
                );
                first.push(layer.first[a]);
                links.push((a, b));
            }
        }
    }

    tree.links.push(links);
    Layer {
        digits,
        stride: layer.stride - 1,
        first,
    }
}

fn distinct(indices: &[u64]) -> bool {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0] != w[1])
}

/// Performs a single solver run for `(seed, nonce)`.
///
/// Returns zero or more unique solutions, each as `2^k` leaf indices in canonical
/// order, sorted lexicographically.
pub fn solutions(p: Params, seed: &[u8], nonce: u32) -> Vec<Vec<u64>> {
    let engine = HashEngine::new(p, seed, nonce);
    let mut tree = Tree {
        links: Vec::with_capacity(p.k as usize),
    };

    let mut layer = Layer::initial(p, &engine);
    for round in 1..=p.k {
        layer = collide(layer, &mut tree);
        trace!("Round {}: {} elements", round, layer.len());
    }

    let mut solutions = Vec::new();
    for pos in 0..layer.len() {
        if layer.row(pos).iter().all(|d| *d == 0) {
            let mut indices = Vec::with_capacity(p.solution_width());
            tree.leaves(p.k as usize, pos, &mut indices);
            if distinct(&indices) {
                solutions.push(indices);
            }
        }
    }

    solutions.sort();
    solutions.dedup();
    debug!(
        "Equihash attempt n={}, k={}, nonce={} found {} solutions",
        p.n,
        p.k,
        nonce,
        solutions.len()
    );
    solutions
}

fn attempt(p: Params, seed: &[u8], nonce: u32) -> Option<Proof> {
    solutions(p, seed, nonce)
        .into_iter()
        .next()
        .map(|indices| Proof {
            n: p.n,
            k: p.k,
            nonce,
            solution: minimal_from_indices(p, &indices),
        })
}

/// Attempts every nonce in `nonces` and returns the proof for the lowest one that has a
/// solution.
#[cfg(feature = "multicore")]
fn search_window(p: Params, seed: &[u8], nonces: Range<u64>) -> Option<Proof> {
    use rayon::prelude::*;

    nonces
        .into_par_iter()
        .find_map_first(|nonce| attempt(p, seed, nonce as u32))
}

#[cfg(not(feature = "multicore"))]
fn search_window(p: Params, seed: &[u8], mut nonces: Range<u64>) -> Option<Proof> {
    nonces.find_map(|nonce| attempt(p, seed, nonce as u32))
}

/// Runs a single attempt with the caller-supplied `nonce`.
///
/// Returns `Ok(None)` if this nonce has no solution; the caller may retry with another.
pub fn solve_with_nonce(seed: &[u8], n: u32, k: u32, nonce: u32) -> Result<Option<Proof>, Error> {
    let p = Params::new(n, k)?;
    Ok(attempt(p, seed, nonce))
}

/// Searches for a proof for `seed` with the parameters `(n, k)`, iterating nonces as
/// described by `config`.
pub fn solve_with_config(
    seed: &[u8],
    n: u32,
    k: u32,
    config: &SolverConfig,
) -> Result<Proof, Error> {
    let p = Params::new(n, k)?;
    let budget = config.budget();
    let window = config.parallelism.max(1) as u64;

    let mut attempts = 0;
    while attempts < budget {
        let start = u64::from(config.start_nonce) + attempts;
        let len = window.min(budget - attempts);
        if let Some(proof) = search_window(p, seed, start..start + len) {
            return Ok(proof);
        }
        attempts += len;
    }

    debug!(
        "Equihash search n={}, k={} gave up after {} nonces",
        n, k, attempts
    );
    Err(Error::NoSolutionFound { attempts })
}

/// Searches for a proof for `seed` with the parameters `(n, k)`, starting from
/// [`DEFAULT_START_NONCE`](crate::DEFAULT_START_NONCE).
pub fn solve(seed: &[u8], n: u32, k: u32) -> Result<Proof, Error> {
    solve_with_config(seed, n, k, &SolverConfig::default())
}
