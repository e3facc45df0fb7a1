//! Padding and XOR helpers

use crate::error::{CipherError, Result};

/// Add PKCS#7 padding to data
///
/// Always appends between 1 and `block_size` bytes, each equal to the number
/// of bytes appended. `block_size` must be in `1..=255`.
pub fn add_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(CipherError::Padding);
    }

    let padding_needed = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding_needed);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding_needed, padding_needed as u8);

    Ok(padded)
}

/// Remove PKCS#7 padding from data
///
/// The final byte `p` must satisfy `1 <= p <= block_size`, the last `p` bytes
/// must all equal `p`, and something must be left once they are removed.
pub fn remove_padding(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let pad = match data.last() {
        Some(&p) => usize::from(p),
        None => return Err(CipherError::Padding),
    };

    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(CipherError::Padding);
    }

    let (message, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(CipherError::Padding);
    }
    if message.is_empty() {
        return Err(CipherError::Padding);
    }

    Ok(message)
}

/// XOR two byte arrays
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherError::BlockTransform(
            "Blocks have different lengths for XOR".to_string()
        ));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
