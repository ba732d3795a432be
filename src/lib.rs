//! # S-DES
//!
//! `sdes-cipher` is an implementation of
//! [Simplified DES](https://doi.org/10.1080/0161-119691884799), Edward
//! Schaefer's reduced teaching variant of DES: an eight-bit block, a
//! ten-bit key, and two Feistel rounds, small enough to trace by hand.
//!
//! It exists to demonstrate the structural mechanics of the DES family
//! (permutation, key schedule, substitution, Feistel rounds) and is
//! exhaustively breakable by design. Do not protect anything with it.
//!
//! For easy interoperation with Rust crypto this crate implements
//! the `BlockCipher` trait from the `block-cipher-trait` crate.

mod keys;
mod tables;
mod transforms;

pub use block_cipher_trait;
pub use block_cipher_trait::generic_array;
pub use generic_array::typenum;

use block_cipher_trait::BlockCipher;
use generic_array::GenericArray;
use std::convert::TryInto;
use thiserror::Error;
use typenum::{U1, U2};

use transforms::{permute, round_function, swap_nibbles};

const ROUNDS: usize = 2;
const MAX_KEY: u16 = 0x3FF;
const MAX_BLOCK: u16 = 0xFF;

/// Errors reported at the key and block boundaries.
///
/// Out-of-range values are rejected outright, never masked down to the
/// declared widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key does not fit in the ten key bits.
    #[error("invalid key {0:#x}: S-DES keys are 10 bits wide (0..=1023)")]
    InvalidKey(u16),
    /// The plaintext or ciphertext does not fit in an eight-bit block.
    #[error("invalid block {0:#x}: S-DES blocks are 8 bits wide (0..=255)")]
    InvalidBlock(u16),
}

/// The S-DES cipher instance
///
/// Holds the ten-bit master key and the two round subkeys derived from it
/// at construction; neither is recomputed or rewritten afterwards.
///
/// Implements both a friendly `u8` block interface as well as the common
/// Rust crypto `block_cipher_trait::BlockCipher` trait for easy use with
/// the wider ecosystem.
#[derive(Debug)]
pub struct SimplifiedDes {
    key: u16,
    subkeys: keys::Subkeys,
}

impl SimplifiedDes {
    /// Constructs an instance from a ten-bit key, rejecting any value
    /// wider than ten bits.
    pub fn new(key: u16) -> Result<SimplifiedDes, Error> {
        if key > MAX_KEY {
            return Err(Error::InvalidKey(key));
        }
        Ok(SimplifiedDes {
            key,
            subkeys: keys::derive_subkeys(key),
        })
    }

    /// Constructs an instance from a big-endian binary key; the six high
    /// bits of the two bytes must be zero.
    pub fn with_binary_key(key: &[u8; 2]) -> Result<SimplifiedDes, Error> {
        SimplifiedDes::new(keys::parse_binary_key(key))
    }

    /// The key this instance was constructed with.
    pub fn master_key(&self) -> u16 {
        self.key
    }

    /// The two round subkeys derived from the master key.
    pub fn subkeys(&self) -> (u8, u8) {
        (self.subkeys[0], self.subkeys[1])
    }

    /// Checked encryption of one block, rejecting values wider than
    /// eight bits.
    pub fn encrypt(&self, plaintext: u16) -> Result<u8, Error> {
        if plaintext > MAX_BLOCK {
            return Err(Error::InvalidBlock(plaintext));
        }
        Ok(self.encrypt_block(plaintext as u8))
    }

    /// Checked decryption of one block, rejecting values wider than
    /// eight bits.
    pub fn decrypt(&self, ciphertext: u16) -> Result<u8, Error> {
        if ciphertext > MAX_BLOCK {
            return Err(Error::InvalidBlock(ciphertext));
        }
        Ok(self.decrypt_block(ciphertext as u8))
    }

    /// Easy encryption of a block stored in an 8-bit integer
    pub fn encrypt_block(&self, block: u8) -> u8 {
        run_rounds(block, self.subkeys)
    }

    /// Easy decryption of a block stored in an 8-bit integer
    pub fn decrypt_block(&self, block: u8) -> u8 {
        run_rounds(block, [self.subkeys[1], self.subkeys[0]])
    }
}

/// Implements BlockCipher over one-byte blocks, with the ten-bit key
/// carried big-endian in two bytes. The trait constructor has no error
/// channel and panics on keys wider than ten bits; the `Result`
/// constructors are the checked path.
impl BlockCipher for SimplifiedDes {
    type KeySize = U2;
    type BlockSize = U1;
    type ParBlocks = U1;

    fn new(key: &GenericArray<u8, U2>) -> Self {
        SimplifiedDes::with_binary_key(key.as_slice().try_into().unwrap()).unwrap()
    }

    fn encrypt_block(&self, block: &mut GenericArray<u8, Self::BlockSize>) {
        block[0] = self.encrypt_block(block[0]);
    }

    fn decrypt_block(&self, block: &mut GenericArray<u8, Self::BlockSize>) {
        block[0] = self.decrypt_block(block[0]);
    }
}

/// IP, the two Feistel rounds with the nibble swap between them, then FP.
/// Decryption is the same path with the round keys reversed.
fn run_rounds(block: u8, round_keys: keys::Subkeys) -> u8 {
    let permuted = permute(&tables::IP, u16::from(block), 8) as u8;
    let first = feistel_round(round_keys[0], permuted);
    let second = feistel_round(round_keys[1], swap_nibbles(first));
    permute(&tables::FP, u16::from(second), 8) as u8
}

/// One Feistel round: XOR F of the right nibble into the left nibble and
/// carry the right nibble through unchanged.
fn feistel_round(subkey: keys::Subkey, block: u8) -> u8 {
    let left = block >> 4;
    let right = block & 0x0F;
    (left ^ round_function(subkey, right)) << 4 | right
}
