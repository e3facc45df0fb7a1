//! Error types for the decryption pipeline

use thiserror::Error;

/// Detailed failure raised inside the pipeline.
///
/// Callers of [`crate::decrypt`] never see this type; it is collapsed into
/// [`DecryptFailure`] at the public boundary. [`crate::try_decrypt`] exposes it
/// for diagnostics and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Key material too short: {0} bytes, need at least 256")]
    KeyLength(usize),

    #[error("Ciphertext length {0} is not a positive multiple of the block size")]
    BlockAlignment(usize),

    #[error("Block transform error: {0}")]
    BlockTransform(String),

    #[error("Padding error")]
    Padding,

    #[error("Plaintext is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Fieldless view of [`CipherError`], handy for comparisons and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputFormat,
    KeyLength,
    BlockAlignment,
    BlockTransform,
    Padding,
    Encoding,
}

impl CipherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::InputFormat(_) => ErrorKind::InputFormat,
            CipherError::KeyLength(_) => ErrorKind::KeyLength,
            CipherError::BlockAlignment(_) => ErrorKind::BlockAlignment,
            CipherError::BlockTransform(_) => ErrorKind::BlockTransform,
            CipherError::Padding => ErrorKind::Padding,
            CipherError::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

/// The single opaque failure returned by [`crate::decrypt`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid ciphertext or key")]
pub struct DecryptFailure;

impl From<CipherError> for DecryptFailure {
    fn from(_: CipherError) -> Self {
        DecryptFailure
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
