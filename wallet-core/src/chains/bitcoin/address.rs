// wallet-core/src/chains/bitcoin/address.rs
//
// Bitcoin Address Module
// P2PKH (Base58Check), P2SH-P2WPKH (Base58Check), P2WPKH (Bech32)

use crate::crypto::key_deriver::HdPublicKey;
use crate::crypto::paths::Purpose;
use crate::error::{CryptoError, WalletResult};
use crate::network::Network;
use bitcoin::address::NetworkUnchecked;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Address convention for a public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressType {
    /// P2PKH: `1...` / `m...`, `n...`
    Legacy,
    /// P2SH-wrapped P2WPKH: `3...` / `2...`
    P2shSegwit,
    /// P2WPKH: `bc1q...` / `tb1q...` / `bcrt1q...`
    NativeSegwit,
}

impl From<Purpose> for AddressType {
    fn from(purpose: Purpose) -> Self {
        match purpose {
            Purpose::Bip44 => AddressType::Legacy,
            Purpose::Bip49 => AddressType::P2shSegwit,
            Purpose::Bip84 => AddressType::NativeSegwit,
        }
    }
}

/// Encoded address. Formatting and equality follow the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    value: String,
    address_type: AddressType,
}

impl Address {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// =============================================================================
// FACTORY SEAM
// =============================================================================
/// Turns a public key into an address string for a network.
pub trait AddressFactory: Send + Sync {
    fn encode(
        &self,
        public_key: &HdPublicKey,
        network: Network,
        address_type: AddressType,
    ) -> WalletResult<Address>;
}

/// Address factory backed by the `bitcoin` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinAddressFactory;

impl AddressFactory for BitcoinAddressFactory {
    fn encode(
        &self,
        public_key: &HdPublicKey,
        network: Network,
        address_type: AddressType,
    ) -> WalletResult<Address> {
        let pubkey = bitcoin::PublicKey::from_slice(&public_key.to_bytes())
            .map_err(|e| CryptoError::InvalidKeyFormat(format!("Invalid secp256k1 public key: {}", e)))?;
        let net = network.to_bitcoin();

        let encoded = match address_type {
            AddressType::Legacy => bitcoin::Address::p2pkh(&pubkey, net),
            AddressType::P2shSegwit => bitcoin::Address::p2shwpkh(&pubkey, net)
                .map_err(|e| CryptoError::AddressEncoding(e.to_string()))?,
            AddressType::NativeSegwit => bitcoin::Address::p2wpkh(&pubkey, net)
                .map_err(|e| CryptoError::AddressEncoding(e.to_string()))?,
        };

        trace!(path = %public_key.path(), ?address_type, %network, "encoded address");
        Ok(Address {
            value: encoded.to_string(),
            address_type,
        })
    }
}

impl BitcoinAddressFactory {
    /// Checks that `address` parses and belongs to `network`.
    pub fn is_valid(address: &str, network: Network) -> bool {
        address
            .parse::<bitcoin::Address<NetworkUnchecked>>()
            .map(|a| a.is_valid_for_network(network.to_bitcoin()))
            .unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key_deriver::{KeyDeriver, Secp256k1Deriver};
    use crate::crypto::paths::{Chain, HdPath};
    use crate::crypto::seed::Seed;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    fn pubkey(purpose: Purpose, network: Network) -> HdPublicKey {
        let seed = Seed::from_bytes(&hex::decode(TEST_SEED).unwrap()).unwrap();
        let path = HdPath::address(purpose, network.coin_type(), 0, Chain::External, 0).unwrap();
        Secp256k1Deriver.derive(&seed, &path).unwrap().public_key()
    }

    fn encode(purpose: Purpose, network: Network) -> Address {
        BitcoinAddressFactory
            .encode(&pubkey(purpose, network), network, purpose.into())
            .unwrap()
    }

    #[test]
    fn test_purpose_to_address_type() {
        assert_eq!(AddressType::from(Purpose::Bip44), AddressType::Legacy);
        assert_eq!(AddressType::from(Purpose::Bip49), AddressType::P2shSegwit);
        assert_eq!(AddressType::from(Purpose::Bip84), AddressType::NativeSegwit);
    }

    #[test]
    fn test_mainnet_prefixes() {
        assert!(encode(Purpose::Bip44, Network::Mainnet).as_str().starts_with('1'));
        assert!(encode(Purpose::Bip49, Network::Mainnet).as_str().starts_with('3'));
        assert!(encode(Purpose::Bip84, Network::Mainnet).as_str().starts_with("bc1q"));
    }

    #[test]
    fn test_test_network_prefixes() {
        let legacy = encode(Purpose::Bip44, Network::Testnet);
        assert!(legacy.as_str().starts_with('m') || legacy.as_str().starts_with('n'));
        assert!(encode(Purpose::Bip49, Network::Testnet).as_str().starts_with('2'));
        assert!(encode(Purpose::Bip84, Network::Signet).as_str().starts_with("tb1q"));
        assert!(encode(Purpose::Bip84, Network::Regtest).as_str().starts_with("bcrt1q"));
    }

    #[test]
    fn test_same_key_different_types_differ() {
        let key = pubkey(Purpose::Bip44, Network::Mainnet);
        let a = BitcoinAddressFactory.encode(&key, Network::Mainnet, AddressType::Legacy).unwrap();
        let b = BitcoinAddressFactory.encode(&key, Network::Mainnet, AddressType::P2shSegwit).unwrap();
        let c = BitcoinAddressFactory.encode(&key, Network::Mainnet, AddressType::NativeSegwit).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(c.address_type(), AddressType::NativeSegwit);
    }

    #[test]
    fn test_is_valid() {
        let mainnet = encode(Purpose::Bip84, Network::Mainnet);
        assert!(BitcoinAddressFactory::is_valid(mainnet.as_str(), Network::Mainnet));
        assert!(!BitcoinAddressFactory::is_valid(mainnet.as_str(), Network::Testnet));

        let legacy = encode(Purpose::Bip44, Network::Mainnet);
        assert!(BitcoinAddressFactory::is_valid(legacy.as_str(), Network::Mainnet));

        assert!(!BitcoinAddressFactory::is_valid("not-an-address", Network::Mainnet));
        assert!(!BitcoinAddressFactory::is_valid("", Network::Mainnet));
    }

    #[test]
    fn test_serde_shape() {
        let address = encode(Purpose::Bip49, Network::Mainnet);
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["address_type"], "p2sh-segwit");
        assert_eq!(json["value"], address.as_str());
    }
}
