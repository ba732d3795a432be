use byteorder::{BigEndian, ByteOrder};

use crate::tables;
use crate::transforms::permute;
use crate::ROUNDS;

pub(crate) type Subkey = u8;
pub(crate) type Subkeys = [Subkey; ROUNDS];

const HALF_BITS: u32 = 5;
const HALF_MASK: u16 = 0x1F;

/// Decodes a big-endian two-byte key into the raw integer it carries.
/// Range validation happens at construction.
pub(crate) fn parse_binary_key(bytes: &[u8; 2]) -> u16 {
    BigEndian::read_u16(bytes)
}

/// Derives the two round subkeys from a ten-bit master key.
///
/// K1 = P8(LS1(P10(key))) and K2 = P8(LS2(LS1(P10(key)))), where LS1
/// rotates each five-bit half left by one position and LS2 by two more.
pub(crate) fn derive_subkeys(key: u16) -> Subkeys {
    let reordered = permute(&tables::P10, key, 10);
    let shifted_once = rotate_halves(reordered, 1);
    let shifted_twice = rotate_halves(shifted_once, 2);
    [
        permute(&tables::P8, shifted_once, 10) as Subkey,
        permute(&tables::P8, shifted_twice, 10) as Subkey,
    ]
}

/// Rotates each five-bit half of a ten-bit register left by `n` positions
/// independently; bits never cross between the halves.
fn rotate_halves(register: u16, n: u32) -> u16 {
    let left = rotate_half(register >> HALF_BITS & HALF_MASK, n);
    let right = rotate_half(register & HALF_MASK, n);
    left << HALF_BITS | right
}

fn rotate_half(half: u16, n: u32) -> u16 {
    (half << n | half >> (HALF_BITS - n)) & HALF_MASK
}
