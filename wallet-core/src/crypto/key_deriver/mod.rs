// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌─────────────────────────────────────────────┐
// │  Seed (16..64 bytes)                        │
// │     │                                       │
// │     ▼  KeyDeriver::derive(seed, HdPath)     │
// │  HdPrivateKey  ──public_key()──▶ HdPublicKey│
// │     │                               │       │
// │     ▼ derive_child(segment)         ▼       │
// │  HdPrivateKey                 AddressFactory│
// └─────────────────────────────────────────────┘
//
// This boundary is the only place EC math happens; everything above it only
// moves opaque keys around.

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;

use crate::crypto::paths::{HdPath, PathSegment};
use crate::crypto::seed::Seed;
use crate::error::{CryptoError, WalletResult};
use bip32::{Prefix, XPrv, XPub};
use zeroize::Zeroizing;

// =============================================================================
// DERIVER SEAM
// =============================================================================
/// Resolves a derivation path against a seed.
///
/// Implementations must be deterministic and must walk every segment with
/// hardened or normal CKD exactly as flagged. Failures are returned, never
/// papered over with a neighbouring index.
pub trait KeyDeriver: Send + Sync {
    fn derive(&self, seed: &Seed, path: &HdPath) -> WalletResult<HdPrivateKey>;
}

// =============================================================================
// KEY TYPES
// =============================================================================
/// Extended private key together with the path it was derived at.
pub struct HdPrivateKey {
    xprv: XPrv,
    path: HdPath,
}

// Custom Debug - never prints key material
impl std::fmt::Debug for HdPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdPrivateKey")
            .field("path", &self.path.to_string())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl HdPrivateKey {
    pub fn from_xprv(xprv: XPrv, path: HdPath) -> Self {
        Self { xprv, path }
    }

    #[inline]
    pub fn path(&self) -> &HdPath {
        &self.path
    }

    /// Public half, computed from the private key (not via CKDpub).
    pub fn public_key(&self) -> HdPublicKey {
        HdPublicKey {
            xpub: self.xprv.public_key(),
            path: self.path.clone(),
        }
    }

    /// Raw 32-byte secret scalar, wiped on drop.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.xprv.to_bytes())
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.xprv.attrs().chain_code
    }

    /// One more CKDpriv step below this key.
    pub fn derive_child(&self, segment: PathSegment) -> WalletResult<HdPrivateKey> {
        let path = self.path.clone().child(segment)?;
        let xprv = self
            .xprv
            .derive_child(segment.child_number())
            .map_err(|e| CryptoError::derivation_failed(&path, e))?;
        Ok(HdPrivateKey { xprv, path })
    }

    /// Base58Check extended key with the given version prefix.
    pub fn to_extended_string(&self, prefix: Prefix) -> Zeroizing<String> {
        self.xprv.to_string(prefix)
    }

    #[inline]
    pub fn as_xprv(&self) -> &XPrv {
        &self.xprv
    }
}

/// Extended public key together with the path it belongs to.
#[derive(Clone)]
pub struct HdPublicKey {
    xpub: XPub,
    path: HdPath,
}

impl std::fmt::Debug for HdPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdPublicKey")
            .field("path", &self.path.to_string())
            .field("key", &self.to_hex())
            .finish()
    }
}

impl PartialEq for HdPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
            && self.chain_code() == other.chain_code()
            && self.path == other.path
    }
}

impl Eq for HdPublicKey {}

impl HdPublicKey {
    #[inline]
    pub fn path(&self) -> &HdPath {
        &self.path
    }

    /// 33-byte SEC1 compressed point.
    pub fn to_bytes(&self) -> [u8; 33] {
        self.xpub.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.xpub.attrs().chain_code
    }

    /// Base58Check extended key with the given version prefix.
    pub fn to_extended_string(&self, prefix: Prefix) -> String {
        self.xpub.to_string(prefix)
    }

    #[inline]
    pub fn as_xpub(&self) -> &XPub {
        &self.xpub
    }
}

// =============================================================================
// TESTS
// =============================================================================
