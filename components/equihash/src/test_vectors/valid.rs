use super::GBP_INPUT;

pub(crate) struct TestVector {
    pub(crate) n: u32,
    pub(crate) k: u32,
    pub(crate) input: &'static [u8],
    /// The first nonce, counting up from 1, for which the solver finds a solution.
    pub(crate) nonce: u32,
    /// The smallest solution found at `nonce`.
    pub(crate) solution: &'static [u64],
    pub(crate) minimal: &'static [u8],
}

/// SHA-256("hello world").
pub(crate) const HELLO_WORLD: [u8; 32] = [
    0xb9, 0x4d, 0x27, 0xb9, 0x93, 0x4d, 0x3e, 0x08, 0xa5, 0x2e, 0x52, 0xd7, 0xda, 0x7d, 0xab,
    0xfa, 0xc4, 0x84, 0xef, 0xe3, 0x7a, 0x53, 0x80, 0xee, 0x90, 0x88, 0xf7, 0xac, 0xe2, 0xef,
    0xcd, 0xe9,
];

pub(crate) const VALID_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        n: 90,
        k: 5,
        input: &HELLO_WORLD,
        nonce: 1,
        solution: &[
            5033, 56153, 19629, 27789, 7809, 35998, 20703, 48403, 12971, 33433, 40182, 61293,
            34117, 61958, 47734, 50147, 6048, 63392, 46079, 52855, 16487, 34064, 33249, 46807,
            11396, 59447, 49028, 55642, 32222, 54244, 37829, 48586,
        ],
        minimal: &[
            0x13, 0xa9, 0xdb, 0x59, 0x4c, 0xad, 0x6c, 0x8d, 0x1e, 0x81, 0x8c, 0x9e, 0x50, 0xdf,
            0xbd, 0x13, 0x32, 0xab, 0x82, 0x99, 0x9c, 0xf6, 0xef, 0x6d, 0x85, 0x45, 0xf2, 0x06,
            0xba, 0x76, 0xc3, 0xe3, 0x17, 0xa0, 0xf7, 0xa0, 0xb3, 0xff, 0xce, 0x77, 0x40, 0x67,
            0x85, 0x10, 0x81, 0xe1, 0xb6, 0xd7, 0x2c, 0x84, 0xe8, 0x37, 0xbf, 0x84, 0xd9, 0x5a,
            0x7d, 0xde, 0xd3, 0xe4, 0x93, 0xc5, 0xbd, 0xca,
        ],
    },
    TestVector {
        n: 8,
        k: 1,
        input: GBP_INPUT,
        nonce: 1,
        solution: &[2, 22],
        minimal: &[0x15, 0x80],
    },
    TestVector {
        n: 21,
        k: 2,
        input: GBP_INPUT,
        nonce: 1,
        solution: &[60, 203, 118, 246],
        minimal: &[0x3c, 0xcb, 0x76, 0xf6],
    },
    TestVector {
        n: 23,
        k: 2,
        input: GBP_INPUT,
        nonce: 1,
        solution: &[56, 94, 224, 240],
        minimal: &[0x38, 0x5e, 0xe0, 0xf0],
    },
    TestVector {
        n: 50,
        k: 3,
        input: GBP_INPUT,
        nonce: 4,
        solution: &[904, 2231, 2164, 3751, 2213, 6759, 2793, 3519],
        minimal: &[
            0x1c, 0x42, 0x2d, 0xd0, 0xe8, 0xea, 0x74, 0x52, 0xe9, 0x9d, 0x5d, 0x2d, 0xbf,
        ],
    },
    TestVector {
        n: 40,
        k: 4,
        input: GBP_INPUT,
        nonce: 1,
        solution: &[
            66, 321, 396, 448, 249, 466, 380, 386, 68, 417, 272, 418, 204, 473, 347, 399,
        ],
        minimal: &[
            0x21, 0x50, 0x71, 0x9c, 0x07, 0xcf, 0x4a, 0xf9, 0x82, 0x22, 0x68, 0x62, 0x1a, 0x26,
            0x67, 0x66, 0xb7, 0x8f,
        ],
    },
];
