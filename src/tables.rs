//! Constant bit-selection tables and substitution boxes.
//!
//! Permutation entries are 1-indexed source-bit positions, counted from the
//! most significant bit of each table's declared input width.

pub(crate) type Sbox = [u8; 16];

/// Initial permutation, 8 -> 8.
pub(crate) const IP: [u8; 8] = [2, 6, 3, 1, 4, 8, 5, 7];

/// Final permutation, 8 -> 8. The inverse of `IP` by construction.
pub(crate) const FP: [u8; 8] = [4, 1, 3, 5, 7, 2, 8, 6];

/// Key-schedule reordering of the ten key bits, 10 -> 10.
pub(crate) const P10: [u8; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];

/// Key-schedule contraction selecting eight of the ten bits, 10 -> 8.
pub(crate) const P8: [u8; 8] = [6, 3, 7, 4, 8, 5, 10, 9];

/// Expansion of the right nibble ahead of key mixing, 4 -> 8.
pub(crate) const EP: [u8; 8] = [4, 1, 2, 3, 2, 3, 4, 1];

/// Reordering of the round-function output, 4 -> 4.
pub(crate) const P4: [u8; 4] = [2, 4, 3, 1];

// The S-boxes are flat row-major 4x4 tables of two-bit values, addressed
// with a group's outer bits as the row and inner bits as the column.

#[rustfmt::skip]
pub(crate) const S0: Sbox = [
    1, 0, 3, 2,
    3, 2, 1, 0,
    0, 2, 1, 3,
    3, 1, 3, 2,
];

#[rustfmt::skip]
pub(crate) const S1: Sbox = [
    0, 1, 2, 3,
    2, 0, 1, 3,
    3, 0, 1, 0,
    2, 1, 0, 3,
];
