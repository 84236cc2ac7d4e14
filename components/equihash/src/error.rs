use core::fmt;

use crate::params::ParamError;

/// Errors that can occur while solving or verifying.
///
/// A well-formed proof that simply does not satisfy the Equihash conditions is not an
/// error; verification reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `(n, k)` pair is outside the supported range.
    InvalidParams(ParamError),
    /// The encoded solution could not be decoded into `2^k` in-range indices.
    MalformedProof(ProofError),
    /// No nonce within the search budget produced a solution.
    NoSolutionFound {
        /// The number of nonces that were attempted.
        attempts: u64,
    },
    /// The worker running a background task went away without replying.
    #[cfg(feature = "async")]
    WorkerDropped,
}

/// The structural defect found in an encoded solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofError {
    /// The encoded solution does not have the length implied by the parameters.
    InvalidLength { expected: usize, actual: usize },
    /// A decoded index does not address a leaf of the initial list.
    IndexOutOfRange { index: u64, leaf_count: u64 },
    /// The bits following the last index are not all zero.
    NonZeroPadding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams(e) => write!(f, "Invalid parameters: {}", e),
            Error::MalformedProof(e) => write!(f, "Malformed proof: {}", e),
            Error::NoSolutionFound { attempts } => {
                write!(f, "No solution found after {} attempts", attempts)
            }
            #[cfg(feature = "async")]
            Error::WorkerDropped => f.write_str("Worker dropped before returning a result"),
        }
    }
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofError::InvalidLength { expected, actual } => write!(
                f,
                "solution is {} bytes, expected {} bytes",
                actual, expected
            ),
            ProofError::IndexOutOfRange { index, leaf_count } => {
                write!(f, "index {} is not below {}", index, leaf_count)
            }
            ProofError::NonZeroPadding => f.write_str("trailing padding bits are not zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<ProofError> for Error {
    fn from(e: ProofError) -> Self {
        Error::MalformedProof(e)
    }
}
