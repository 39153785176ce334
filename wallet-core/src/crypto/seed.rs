// wallet-core/src/crypto/seed.rs
//
// Seed Module - owned BIP-32 master seed
// BIP-39 (Mnemonic -> Seed via PBKDF2-HMAC-SHA512)

use crate::error::{CryptoError, MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use zeroize::Zeroizing;

/// Wallet seed
///
/// # Security
/// - Not `Clone`: the wallet that owns it is the only holder of the secret
/// - Bytes live in `Zeroizing` and are wiped on drop
/// - `Debug` never prints the bytes
pub struct Seed {
    bytes: Zeroizing<Vec<u8>>,
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Seed {
    /// BIP-32 allows 128 to 512 bits.
    pub const MIN_LEN: usize = 16;
    pub const MAX_LEN: usize = 64;

    /// Copy raw seed bytes into an owned, zeroizing buffer.
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        Self::validate_len(bytes.len())?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Take ownership of an already-zeroizing buffer without another copy.
    pub fn from_zeroizing(bytes: Zeroizing<Vec<u8>>) -> WalletResult<Self> {
        Self::validate_len(bytes.len())?;
        Ok(Self { bytes })
    }

    /// Derive the seed from a BIP-39 phrase and optional passphrase.
    ///
    /// Whitespace between words is normalized before parsing.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();
        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let mnemonic = Mnemonic::parse(normalized.join(" ")).map_err(|e| match e {
            bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
            bip39::Error::UnknownWord(i) => MnemonicError::UnknownWord(i),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        })?;

        let seed = Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or("")));
        Self::from_bytes(&seed[..])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn validate_len(len: usize) -> WalletResult<()> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(WalletError::Crypto(CryptoError::InvalidSeed(format!(
                "expected {}..={} bytes, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                len
            ))));
        }
        Ok(())
    }
}
