use super::{valid::HELLO_WORLD, GBP_INPUT};
use crate::verify::Kind;

pub(crate) struct TestVector {
    pub(crate) n: u32,
    pub(crate) k: u32,
    pub(crate) input: &'static [u8],
    pub(crate) nonce: u32,
    pub(crate) solution: &'static [u64],
    pub(crate) error: Kind,
}

pub(crate) const INVALID_TEST_VECTORS: &[TestVector] = &[
    // Original valid solution: [
    //     5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
    //     34117, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
    //     11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
    // ]

    // Change one index
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            5034, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            34117, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
            11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
        ],
        error: Kind::Collision,
    },
    // Swap two arbitrary indices
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            34117, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            5033, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
            11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
        ],
        error: Kind::Collision,
    },
    // Reverse the first pair of indices
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            56153, 5033, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            34117, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
            11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
        ],
        error: Kind::OutOfOrder,
    },
    // Swap the halves of the tree
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807, 11396, 59447, 49028, 55642,
            32222, 54244, 37829, 48586, 5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403,
            12971, 33433, 40182, 61293, 34117, 61958, 47734, 50147,
        ],
        error: Kind::OutOfOrder,
    },
    // Sort the indices
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            5033, 6048, 7809, 11396, 12971, 16487, 19629, 20703, 27789, 32222, 33249, 33433,
            34064, 34117, 35998, 37829, 40182, 46079, 46807, 47734, 48403, 48586, 49028, 50147,
            52855, 54244, 55642, 56153, 59447, 61293, 61958, 63392,
        ],
        error: Kind::Collision,
    },
    // Duplicate the first half
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            34117, 61958, 47734, 50147, 5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403,
            12971, 33433, 40182, 61293, 34117, 61958, 47734, 50147,
        ],
        error: Kind::OutOfOrder,
    },
    // Wrong nonce
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 2,
        solution: &[
            5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            34117, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
            11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
        ],
        error: Kind::Collision,
    },
    // A colliding, correctly ordered tree that reuses a leaf
    TestVector {
        n: 21,
        k: 2,
        input: GBP_INPUT,
        nonce: 22,
        solution: &[39, 106, 106, 172],
        error: Kind::DuplicateIdxs,
    },
    // A colliding, correctly ordered tree with a non-zero root
    TestVector {
        n: 21,
        k: 2,
        input: GBP_INPUT,
        nonce: 22,
        solution: &[39, 172, 83, 195],
        error: Kind::NonZeroRootHash,
    },
];
