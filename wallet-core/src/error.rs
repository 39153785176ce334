// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word #{0} not found in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Seed rejected before any derivation happened.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Segment out of range, bad hardened marker, or unparsable path text.
    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    /// A CKD step produced an invalid key. BIP-32 would skip to the next
    /// index; we surface it and let the caller decide.
    #[error("Key derivation failed at '{path}': {reason}")]
    DerivationFailed { path: String, reason: String },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Address encoding failed: {0}")]
    AddressEncoding(String),
}

impl CryptoError {
    pub(crate) fn derivation_failed(path: impl ToString, reason: impl ToString) -> Self {
        CryptoError::DerivationFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
