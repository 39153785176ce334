// wallet-core/src/wallet/config.rs

use crate::network::Network;
use serde::{Deserialize, Serialize};

/// Construction-time settings for an [`HdWallet`](super::HdWallet).
///
/// Missing fields fall back to mainnet, account 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub network: Network,
    pub account: u32,
}

// Helpers for the common networks
impl WalletConfig {
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            account: 0,
        }
    }

    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            account: 0,
        }
    }

    pub fn signet() -> Self {
        Self {
            network: Network::Signet,
            account: 0,
        }
    }

    pub fn regtest() -> Self {
        Self {
            network: Network::Regtest,
            account: 0,
        }
    }

    pub fn with_account(mut self, account: u32) -> Self {
        self.account = account;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(WalletConfig::default(), WalletConfig::mainnet());
        assert_eq!(WalletConfig::signet().network, Network::Signet);
        assert_eq!(WalletConfig::testnet().with_account(3).account, 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: WalletConfig = serde_json::from_str(r#"{"network":"regtest"}"#).unwrap();
        assert_eq!(config, WalletConfig::regtest());

        let config: WalletConfig = serde_json::from_str(r#"{"account":7}"#).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.account, 7);
    }

    #[test]
    fn test_deserialize_rejects_unknown_network() {
        assert!(serde_json::from_str::<WalletConfig>(r#"{"network":"litecoin"}"#).is_err());
    }
}
