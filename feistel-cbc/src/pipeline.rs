//! Hex/base64 text interface over the Feistel-CBC cipher
//!
//! Decryption checks its inputs in a fixed order so a given bad input always
//! fails the same way:
//!
//! 1. ciphertext is non-empty and made of hex digits
//! 2. ciphertext has an even number of digits
//! 3. key is non-empty, padded standard base64
//! 4. key decodes to at least 256 bytes
//! 5. ciphertext is a positive multiple of 64 bytes
//! 6. every block transforms
//! 7. padding is valid
//! 8. plaintext is UTF-8
//!
//! One leading byte-order mark is dropped from the decoded text.

use log::debug;

use crate::error::{CipherError, DecryptFailure, Result};
use crate::feistel::{FeistelCipher, BLOCK_SIZE};
use crate::key::KeyMaterial;
use crate::modes::CipherModes;
use crate::utils;

/// Decrypts `ciphertext_hex` with `key_b64`.
///
/// Every failure, whatever its cause, is reported as the same
/// [`DecryptFailure`]. Use [`try_decrypt`] to see the cause.
pub fn decrypt(ciphertext_hex: &str, key_b64: &str) -> std::result::Result<String, DecryptFailure> {
    try_decrypt(ciphertext_hex, key_b64).map_err(|e| {
        debug!("decryption failed: {:?}", e.kind());
        DecryptFailure::from(e)
    })
}

/// Decrypts `ciphertext_hex` with `key_b64`, reporting the failure kind.
pub fn try_decrypt(ciphertext_hex: &str, key_b64: &str) -> Result<String> {
    check_hex(ciphertext_hex)?;

    let key = KeyMaterial::from_base64(key_b64)?;

    let ciphertext = hex::decode(ciphertext_hex)
        .map_err(|e| CipherError::InputFormat(format!("ciphertext is not valid hex: {e}")))?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BlockAlignment(ciphertext.len()));
    }

    let cipher = FeistelCipher::new(&key)?;
    let padded = CipherModes::cbc_decrypt(&cipher, &ciphertext, key.iv_seed())?;
    let message = utils::remove_padding(&padded, BLOCK_SIZE)?;

    let text = String::from_utf8(message.to_vec())?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Encrypts `plaintext` with `key_b64`, returning upper-case hex.
///
/// The inverse of [`decrypt`]: PKCS#7 padding, CBC chaining with the key's IV
/// and the inverse Feistel round. Empty plaintext is rejected because it could
/// never be decrypted. A leading byte-order mark does not survive decryption.
pub fn encrypt(plaintext: &str, key_b64: &str) -> Result<String> {
    if plaintext.is_empty() {
        return Err(CipherError::InputFormat("plaintext is empty".to_string()));
    }

    let key = KeyMaterial::from_base64(key_b64)?;
    let cipher = FeistelCipher::new(&key)?;

    let padded = utils::add_padding(plaintext.as_bytes(), BLOCK_SIZE)?;
    let ciphertext = CipherModes::cbc_encrypt(&cipher, &padded, key.iv_seed())?;

    Ok(hex::encode_upper(ciphertext))
}

fn check_hex(ciphertext_hex: &str) -> Result<()> {
    if ciphertext_hex.is_empty() {
        return Err(CipherError::InputFormat("ciphertext is empty".to_string()));
    }
    if !ciphertext_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CipherError::InputFormat(
            "ciphertext contains non-hex characters".to_string(),
        ));
    }
    if ciphertext_hex.len() % 2 != 0 {
        return Err(CipherError::InputFormat(
            "ciphertext has an odd number of hex digits".to_string(),
        ));
    }
    Ok(())
}
