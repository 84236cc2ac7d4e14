/// The nonce that nonce iteration starts from unless configured otherwise.
pub const DEFAULT_START_NONCE: u32 = 1;

/// Controls how the solver walks the nonce space.
///
/// The outcome of a search depends only on `start_nonce` and `max_attempts`: the
/// returned proof always carries the lowest nonce in range that has a solution,
/// whatever the `parallelism`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// The first nonce to attempt.
    pub start_nonce: u32,
    /// The number of nonces to attempt before giving up with
    /// [`Error::NoSolutionFound`](crate::Error::NoSolutionFound). `None` searches until
    /// the nonce space is exhausted.
    pub max_attempts: Option<u32>,
    /// The number of nonces attempted concurrently. Values below 1 are treated as 1.
    pub parallelism: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            start_nonce: DEFAULT_START_NONCE,
            max_attempts: None,
            parallelism: default_parallelism(),
        }
    }
}

impl SolverConfig {
    pub fn with_start_nonce(mut self, start_nonce: u32) -> Self {
        self.start_nonce = start_nonce;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// The number of nonces this configuration allows, clamped to the end of the nonce
    /// space.
    pub(crate) fn budget(&self) -> u64 {
        let available = u64::from(u32::MAX) - u64::from(self.start_nonce) + 1;
        self.max_attempts
            .map_or(available, |max| u64::from(max).min(available))
    }
}

#[cfg(feature = "multicore")]
fn default_parallelism() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "multicore"))]
fn default_parallelism() -> usize {
    1
}
