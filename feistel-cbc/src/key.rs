//! Key material parsing
//!
//! A key is a base64 string that decodes to at least 256 bytes. The first 256
//! bytes are split into four 64-byte subkeys:
//!
//! | bytes     | subkey      | used for                     |
//! |-----------|-------------|------------------------------|
//! | 0..64     | `iv_seed`   | CBC initialization vector    |
//! | 64..128   | `perm_seed` | byte permutation schedule    |
//! | 128..192  | `op_seed`   | round operation selectors    |
//! | 192..256  | `op_params` | round function parameters    |

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::{CipherError, Result};

/// Length of each subkey in bytes
pub const SUBKEY_LEN: usize = 64;

/// Minimum number of decoded key bytes
pub const KEY_MATERIAL_LEN: usize = 4 * SUBKEY_LEN;

// Standard alphabet with mandatory `=` padding. Non-zero trailing bits in the
// final quantum are tolerated so keys produced by lenient encoders still load.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// The four subkeys derived from a decoded key
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    iv_seed: [u8; SUBKEY_LEN],
    perm_seed: [u8; SUBKEY_LEN],
    op_seed: [u8; SUBKEY_LEN],
    op_params: [u8; SUBKEY_LEN],
}

impl KeyMaterial {
    /// Decodes a base64 key and splits it into subkeys.
    ///
    /// Fails with [`CipherError::InputFormat`] if the string is not standard
    /// padded base64, and with [`CipherError::KeyLength`] if it decodes to
    /// fewer than 256 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(CipherError::InputFormat("key is empty".to_string()));
        }

        let bytes = KEY_ENGINE
            .decode(encoded)
            .map_err(|e| CipherError::InputFormat(format!("key is not valid base64: {e}")))?;

        Self::from_bytes(&bytes)
    }

    /// Splits raw key bytes into subkeys. Bytes past the first 256 are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < KEY_MATERIAL_LEN {
            return Err(CipherError::KeyLength(bytes.len()));
        }

        Ok(KeyMaterial {
            iv_seed: segment(bytes, 0),
            perm_seed: segment(bytes, 1),
            op_seed: segment(bytes, 2),
            op_params: segment(bytes, 3),
        })
    }

    pub fn iv_seed(&self) -> &[u8; SUBKEY_LEN] {
        &self.iv_seed
    }

    pub fn perm_seed(&self) -> &[u8; SUBKEY_LEN] {
        &self.perm_seed
    }

    pub fn op_seed(&self) -> &[u8; SUBKEY_LEN] {
        &self.op_seed
    }

    pub fn op_params(&self) -> &[u8; SUBKEY_LEN] {
        &self.op_params
    }
}

// Key bytes stay out of logs and panic messages.
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial").finish_non_exhaustive()
    }
}

fn segment(bytes: &[u8], index: usize) -> [u8; SUBKEY_LEN] {
    let mut subkey = [0u8; SUBKEY_LEN];
    subkey.copy_from_slice(&bytes[index * SUBKEY_LEN..(index + 1) * SUBKEY_LEN]);
    subkey
}
