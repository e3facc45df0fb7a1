//! CBC (Cipher Block Chaining) mode implementation

use log::trace;

use crate::{error::CipherError, utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    ///
    /// `C_i = E(P_i ⊕ C_{i-1})` with `C_{-1} = IV`. The plaintext must already
    /// be padded to a whole number of blocks.
    pub fn cbc_encrypt<C: BlockCipher>(
        cipher: &C,
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_layout(plaintext.len(), iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut previous_block = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let xored = utils::xor_blocks(chunk, &previous_block)?;
            let encrypted_block = cipher.encrypt(&xored)?;
            ciphertext.extend(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption
    ///
    /// `P_i = D(C_i) ⊕ C_{i-1}` with `C_{-1} = IV`. Padding is left in place.
    pub fn cbc_decrypt<C: BlockCipher>(
        cipher: &C,
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_layout(ciphertext.len(), iv, block_size)?;

        trace!("cbc decrypt of {} blocks", ciphertext.len() / block_size);

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block = iv;

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt(chunk)?;
            let xored = utils::xor_blocks(&decrypted_block, previous_block)?;
            plaintext.extend(xored);
            previous_block = chunk;
        }

        Ok(plaintext)
    }

    fn validate_layout(len: usize, iv: &[u8], block_size: usize) -> Result<()> {
        if block_size == 0 {
            return Err(CipherError::BlockTransform("block size must be > 0".to_string()));
        }

        if iv.len() != block_size {
            return Err(CipherError::BlockTransform(format!(
                "IV is {} bytes, expected {}",
                iv.len(),
                block_size
            )));
        }

        if len == 0 || len % block_size != 0 {
            return Err(CipherError::BlockAlignment(len));
        }

        Ok(())
    }
}
