//! 64-byte Feistel block cipher
//!
//! A block is split into a left half `L` (bytes 0..32) and a right half `R`
//! (bytes 32..64). One decryption round computes
//!
//! ```text
//! L'[j] = R[j] ^ F(L[x_order[j] mod 32], calc_order[j])
//! R'    = L
//! ```
//!
//! and the same round is applied 16 times. Encryption applies the inverse
//! round `(L', R') -> (R', L' ^ F(R'))` 16 times, so it undoes decryption
//! exactly even though the round loop is not the textbook reversed schedule.

use std::fmt;

use log::trace;

use crate::cipher::BlockCipher;
use crate::error::{CipherError, Result};
use crate::key::{KeyMaterial, SUBKEY_LEN};
use crate::sbox::{INV_SBOX, SBOX};
use crate::schedule::ByteSchedule;

/// Block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Size of one Feistel half in bytes
pub const HALF_BLOCK: usize = BLOCK_SIZE / 2;

/// Number of Feistel rounds
pub const ROUNDS: usize = 16;

type Half = [u8; HALF_BLOCK];

/// Round function selected by `op & 7`, parameterized by the first three
/// bytes of the operation parameter subkey.
///
/// | op | result                    |
/// |----|---------------------------|
/// | 0  | `b ^ k[0]`                |
/// | 1  | `SBOX[b] ^ k[1]`          |
/// | 2  | `b` rotated left `k[2] & 7` |
/// | 3  | `b + k[0]` (wrapping)     |
/// | 4  | `b * 5` (wrapping)        |
/// | 5  | `b * 13` (wrapping)       |
/// | 6  | `b ^ nibble_swap(b)`      |
/// | 7  | `INV_SBOX[b] ^ k[2]`      |
pub fn round_function(byte: u8, op: u8, params: &[u8; SUBKEY_LEN]) -> u8 {
    match op & 7 {
        0 => byte ^ params[0],
        1 => SBOX[byte as usize] ^ params[1],
        2 => byte.rotate_left(u32::from(params[2] & 7)),
        3 => byte.wrapping_add(params[0]),
        4 => byte.wrapping_mul(5),
        5 => byte.wrapping_mul(13),
        6 => byte ^ byte.rotate_left(4),
        _ => INV_SBOX[byte as usize] ^ params[2],
    }
}

/// Feistel cipher keyed by a byte schedule and the operation parameters
#[derive(Clone)]
pub struct FeistelCipher {
    schedule: ByteSchedule,
    op_params: [u8; SUBKEY_LEN],
    rounds: usize,
}

impl FeistelCipher {
    /// Derives the schedules from `perm_seed`/`op_seed` and keeps `op_params`.
    pub fn new(key: &KeyMaterial) -> Result<Self> {
        let schedule = ByteSchedule::generate(key.perm_seed(), key.op_seed())?;
        Ok(Self::with_schedule(schedule, *key.op_params()))
    }

    pub fn with_schedule(schedule: ByteSchedule, op_params: [u8; SUBKEY_LEN]) -> Self {
        FeistelCipher {
            schedule,
            op_params,
            rounds: ROUNDS,
        }
    }

    pub fn schedule(&self) -> &ByteSchedule {
        &self.schedule
    }

    /// Decrypts one 64-byte block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let (mut left, mut right) = split_block(block)?;

        for _ in 0..self.rounds {
            let mixed = self.mix(&left, &right)?;
            right = left;
            left = mixed;
        }

        Ok(join_halves(&left, &right))
    }

    /// Encrypts one 64-byte block. Inverse of [`FeistelCipher::decrypt_block`].
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let (mut left, mut right) = split_block(block)?;

        for _ in 0..self.rounds {
            let restored = self.mix(&right, &left)?;
            left = right;
            right = restored;
        }

        Ok(join_halves(&left, &right))
    }

    /// Returns `target[j] ^ F(source[x_order[j] mod 32], calc_order[j])`.
    fn mix(&self, source: &Half, target: &Half) -> Result<Half> {
        let x_order = self.schedule.x_order();
        let calc_order = self.schedule.calc_order();
        let mut mixed = [0u8; HALF_BLOCK];

        for j in 0..HALF_BLOCK {
            let index = x_order[j] as usize;
            let folded = if index < HALF_BLOCK { index } else { index - HALF_BLOCK };
            let byte = *source.get(folded).ok_or_else(|| {
                CipherError::BlockTransform(format!("schedule index {index} out of range"))
            })?;

            mixed[j] = target[j] ^ round_function(byte, calc_order[j], &self.op_params);
        }

        Ok(mixed)
    }
}

impl fmt::Debug for FeistelCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeistelCipher")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

impl BlockCipher for FeistelCipher {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_block(block).map(|b| b.to_vec())
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_block(block).map(|b| b.to_vec())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

fn split_block(block: &[u8]) -> Result<(Half, Half)> {
    if block.len() != BLOCK_SIZE {
        return Err(CipherError::BlockTransform(format!(
            "block is {} bytes, expected {}",
            block.len(),
            BLOCK_SIZE
        )));
    }

    let mut left = [0u8; HALF_BLOCK];
    let mut right = [0u8; HALF_BLOCK];
    left.copy_from_slice(&block[..HALF_BLOCK]);
    right.copy_from_slice(&block[HALF_BLOCK..]);
    trace!("split {}-byte block into halves", block.len());

    Ok((left, right))
}

fn join_halves(left: &Half, right: &Half) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..HALF_BLOCK].copy_from_slice(left);
    block[HALF_BLOCK..].copy_from_slice(right);
    block
}
