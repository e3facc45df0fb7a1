//! Byte permutation and operation schedules derived from key material

use log::trace;

use crate::error::{CipherError, Result};
use crate::key::SUBKEY_LEN;

/// Number of distinct round-function operations
pub const OPERATION_COUNT: u8 = 8;

/// Per-key schedules driving the Feistel round function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSchedule {
    x_order: [u8; SUBKEY_LEN],
    calc_order: [u8; SUBKEY_LEN],
}

impl ByteSchedule {
    /// Builds the schedules from the permutation seed and the operation seed.
    ///
    /// `x_order` lists the indices of `perm_seed` sorted by byte value in
    /// descending order. Equal values keep their original relative order.
    /// `calc_order` is each byte of `op_seed` reduced modulo 8.
    ///
    /// Both seeds must be exactly 64 bytes long.
    pub fn generate(perm_seed: &[u8], op_seed: &[u8]) -> Result<Self> {
        if perm_seed.len() != SUBKEY_LEN {
            return Err(CipherError::BlockTransform(format!(
                "permutation seed is {} bytes, expected {}",
                perm_seed.len(),
                SUBKEY_LEN
            )));
        }
        if op_seed.len() != SUBKEY_LEN {
            return Err(CipherError::BlockTransform(format!(
                "operation seed is {} bytes, expected {}",
                op_seed.len(),
                SUBKEY_LEN
            )));
        }

        // sort_by is stable, so ties stay in index order
        let mut pairs: Vec<(u8, u8)> = perm_seed
            .iter()
            .enumerate()
            .map(|(index, &value)| (value, index as u8))
            .collect();
        pairs.sort_by(|a, b| b.0.cmp(&a.0));

        let mut x_order = [0u8; SUBKEY_LEN];
        for (slot, (_, index)) in x_order.iter_mut().zip(pairs) {
            *slot = index;
        }

        let mut calc_order = [0u8; SUBKEY_LEN];
        for (slot, &value) in calc_order.iter_mut().zip(op_seed) {
            *slot = value % OPERATION_COUNT;
        }

        trace!("derived byte schedule (x_order head {:?})", &x_order[..4]);

        Ok(ByteSchedule { x_order, calc_order })
    }

    pub fn x_order(&self) -> &[u8; SUBKEY_LEN] {
        &self.x_order
    }

    pub fn calc_order(&self) -> &[u8; SUBKEY_LEN] {
        &self.calc_order
    }
}
