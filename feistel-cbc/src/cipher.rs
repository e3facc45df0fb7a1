//! Generic block cipher trait

use crate::error::Result;

/// Trait for a keyed block cipher used by the chaining modes
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}
