//! # Feistel-CBC Library
//!
//! Decryption engine for a 64-byte-block Feistel cipher run in CBC mode.
//! The schedules that drive the round function are derived from the key.
//!
//! ## Pipeline
//!
//! - **Key material**: a base64 key decoding to at least 256 bytes, split into
//!   four 64-byte subkeys (IV, permutation seed, operation seed, parameters)
//! - **Schedules**: a byte permutation and a per-byte operation selector
//! - **Block core**: 16 Feistel rounds over 32-byte halves
//! - **CBC**: chaining with the first subkey as IV
//! - **Padding**: PKCS#7 with pad length in `1..=64`
//! - **Text**: strict UTF-8
//!
//! ## Usage
//!
//! ```rust
//! use base64::{engine::general_purpose::STANDARD, Engine as _};
//!
//! let key = STANDARD.encode((0..=255u8).collect::<Vec<u8>>());
//!
//! let ciphertext = feistel_cbc::encrypt("Hello, World!", &key)?;
//! let plaintext = feistel_cbc::decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, "Hello, World!");
//!
//! // Any failure is the same opaque value
//! assert!(feistel_cbc::decrypt("00", &key).is_err());
//! # Ok::<(), feistel_cbc::CipherError>(())
//! ```
//!
//! ## Failure reporting
//!
//! [`decrypt`] never says why it failed. [`try_decrypt`] runs the same
//! pipeline and returns a [`CipherError`] whose [`ErrorKind`] names the stage
//! that rejected the input.

// Public modules
pub mod cipher;
pub mod error;
pub mod feistel;
pub mod key;
pub mod modes;
pub mod pipeline;
pub mod schedule;
pub mod utils;

mod sbox;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use error::{CipherError, DecryptFailure, ErrorKind, Result};
pub use feistel::{FeistelCipher, BLOCK_SIZE};
pub use key::KeyMaterial;
pub use modes::CipherModes;
pub use pipeline::{decrypt, encrypt, try_decrypt};
pub use schedule::ByteSchedule;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
