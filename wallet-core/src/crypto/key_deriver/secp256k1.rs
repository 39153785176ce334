// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::{HdPrivateKey, KeyDeriver};
use crate::crypto::paths::HdPath;
use crate::crypto::seed::Seed;
use crate::error::{CryptoError, WalletResult};
use bip32::XPrv;
use tracing::debug;

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// # Security
/// - Seed is only borrowed, never copied
/// - Intermediate keys are dropped as soon as the next level exists
///
/// # Failure
/// A CKD step that lands on an invalid key is reported as
/// `DerivationFailed` for that path. No retry with `index + 1` happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Master extended key for a seed.
    pub fn master(seed: &Seed) -> WalletResult<XPrv> {
        XPrv::new(seed.as_bytes()).map_err(|e| match e {
            bip32::Error::SeedLength => CryptoError::InvalidSeed(e.to_string()).into(),
            other => CryptoError::derivation_failed("m", other).into(),
        })
    }
}

impl KeyDeriver for Secp256k1Deriver {
    fn derive(&self, seed: &Seed, path: &HdPath) -> WalletResult<HdPrivateKey> {
        let master = HdPrivateKey::from_xprv(Self::master(seed)?, HdPath::master());

        let key = path
            .segments()
            .try_fold(master, |parent, segment| parent.derive_child(segment))?;

        debug!(path = %path, depth = path.depth(), "derived secp256k1 key");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::{Chain, Purpose};

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    fn seed() -> Seed {
        Seed::from_bytes(&hex::decode(TEST_SEED).unwrap()).unwrap()
    }

    #[test]
    fn test_derive_bitcoin_key() {
        let path = HdPath::address(Purpose::Bip84, 0, 0, Chain::External, 0).unwrap();
        let key = Secp256k1Deriver.derive(&seed(), &path).unwrap();
        assert_eq!(key.to_bytes().len(), 32);
        assert_eq!(key.path(), &path);
    }

    #[test]
    fn test_consistency() {
        let path = HdPath::address(Purpose::Bip44, 0, 0, Chain::External, 0).unwrap();
        let k1 = Secp256k1Deriver.derive(&seed(), &path).unwrap();
        let k2 = Secp256k1Deriver.derive(&seed(), &path).unwrap();
        assert_eq!(&*k1.to_bytes(), &*k2.to_bytes());
        assert_eq!(k1.chain_code(), k2.chain_code());
    }

    #[test]
    fn test_different_paths_different_keys() {
        let seed = seed();
        let legacy = HdPath::address(Purpose::Bip44, 0, 0, Chain::External, 0).unwrap();
        let segwit = HdPath::address(Purpose::Bip84, 0, 0, Chain::External, 0).unwrap();
        let change = HdPath::address(Purpose::Bip44, 0, 0, Chain::Internal, 0).unwrap();

        let a = Secp256k1Deriver.derive(&seed, &legacy).unwrap();
        let b = Secp256k1Deriver.derive(&seed, &segwit).unwrap();
        let c = Secp256k1Deriver.derive(&seed, &change).unwrap();
        assert_ne!(&*a.to_bytes(), &*b.to_bytes());
        assert_ne!(&*a.to_bytes(), &*c.to_bytes());
    }

    #[test]
    fn test_master_for_short_seed() {
        let short = Seed::from_bytes(&[1u8; 16]).unwrap();
        assert!(Secp256k1Deriver::master(&short).is_ok());
    }

    #[test]
    fn test_account_depth() {
        let path = HdPath::account(Purpose::Bip49, 1, 0).unwrap();
        let key = Secp256k1Deriver.derive(&seed(), &path).unwrap();
        assert_eq!(key.as_xprv().attrs().depth, 3);
        assert_eq!(key.path().to_string(), "m/49'/1'/0'");
    }
}
