//! Block chaining modes
//!
//! Only CBC is provided. The IV is taken from the key material by the caller.

pub mod cbc;

/// Namespace for the chaining mode functions
pub struct CipherModes;
