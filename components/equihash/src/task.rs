//! Non-blocking forms of the solver and verifier.
//!
//! Each call copies its inputs, hands the blocking computation to the rayon global
//! thread pool, and returns a future that resolves once the result has been sent back.
//! The work starts immediately, whether or not the future is polled; dropping the
//! future abandons the result but does not stop the computation.

use alloc::vec::Vec;
use core::future::Future;

use tokio::sync::oneshot;

use crate::{solver, verify, Error, Proof, SolverConfig};

fn spawn<T, F>(f: F) -> impl Future<Output = Result<T, Error>> + Send + 'static
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, Error> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    rayon::spawn_fifo(move || {
        if tx.send(f()).is_err() {
            tracing::debug!("Equihash task receiver was dropped before the task finished");
        }
    });
    async move {
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(Error::WorkerDropped),
        }
    }
}

/// Non-blocking form of [`solve`](crate::solve).
pub fn solve_async(
    seed: &[u8],
    n: u32,
    k: u32,
) -> impl Future<Output = Result<Proof, Error>> + Send + 'static {
    solve_with_config_async(seed, n, k, SolverConfig::default())
}

/// Non-blocking form of [`solve_with_config`](crate::solve_with_config).
pub fn solve_with_config_async(
    seed: &[u8],
    n: u32,
    k: u32,
    config: SolverConfig,
) -> impl Future<Output = Result<Proof, Error>> + Send + 'static {
    let seed: Vec<u8> = seed.to_vec();
    spawn(move || solver::solve_with_config(&seed, n, k, &config))
}

/// Non-blocking form of [`verify`](crate::verify).
pub fn verify_async(
    seed: &[u8],
    proof: &Proof,
) -> impl Future<Output = Result<bool, Error>> + Send + 'static {
    let seed: Vec<u8> = seed.to_vec();
    let proof = proof.clone();
    spawn(move || verify::verify(&seed, &proof))
}
