mod invalid;
mod valid;

pub(crate) use invalid::INVALID_TEST_VECTORS;
pub(crate) use valid::{HELLO_WORLD, VALID_TEST_VECTORS};

pub(crate) const GBP_INPUT: &[u8] =
    b"Equihash is an asymmetric PoW based on the Generalised Birthday problem.";
