// wallet-core/src/network.rs
//
// Network Resolver
//
// Maps a network selector to its SLIP-44 coin type, to the `bitcoin` crate's
// network parameters, and to SLIP-132 extended key version bytes.

use crate::crypto::paths::{coin_type, Purpose};
use crate::error::{WalletError, WalletResult};
use bip32::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// SLIP-132 version bytes for BIP-49/84 keys on test networks
const UPRV: Prefix = Prefix::from_parts_unchecked("uprv", 0x044a_4e28);
const UPUB: Prefix = Prefix::from_parts_unchecked("upub", 0x044a_5262);
const VPRV: Prefix = Prefix::from_parts_unchecked("vprv", 0x045f_18bc);
const VPUB: Prefix = Prefix::from_parts_unchecked("vpub", 0x045f_1cf6);

/// Bitcoin network selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Signet,
    Regtest,
}

impl Network {
    /// SLIP-44 coin type: `0` on mainnet, `1` on every test network.
    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            Network::Mainnet => coin_type::BITCOIN,
            Network::Testnet | Network::Signet | Network::Regtest => coin_type::TESTNET,
        }
    }

    #[inline]
    pub const fn is_mainnet(self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Network parameters handed to the address encoder.
    pub fn to_bitcoin(self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
            Network::Signet => bitcoin::Network::Signet,
            Network::Regtest => bitcoin::Network::Regtest,
        }
    }

    /// SLIP-132 version prefixes `(private, public)` for account-level keys.
    ///
    /// | purpose | mainnet       | test networks |
    /// |---------|---------------|---------------|
    /// | 44      | `xprv`/`xpub` | `tprv`/`tpub` |
    /// | 49      | `yprv`/`ypub` | `uprv`/`upub` |
    /// | 84      | `zprv`/`zpub` | `vprv`/`vpub` |
    pub const fn extended_key_prefixes(self, purpose: Purpose) -> (Prefix, Prefix) {
        match (self.is_mainnet(), purpose) {
            (true, Purpose::Bip44) => (Prefix::XPRV, Prefix::XPUB),
            (true, Purpose::Bip49) => (Prefix::YPRV, Prefix::YPUB),
            (true, Purpose::Bip84) => (Prefix::ZPRV, Prefix::ZPUB),
            (false, Purpose::Bip44) => (Prefix::TPRV, Prefix::TPUB),
            (false, Purpose::Bip49) => (UPRV, UPUB),
            (false, Purpose::Bip84) => (VPRV, VPUB),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> WalletResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" | "test" | "testnet3" => Ok(Network::Testnet),
            "signet" => Ok(Network::Signet),
            "regtest" => Ok(Network::Regtest),
            other => Err(WalletError::Validation(format!("Unknown network '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_type() {
        assert_eq!(Network::Mainnet.coin_type(), 0);
        assert_eq!(Network::Testnet.coin_type(), 1);
        assert_eq!(Network::Signet.coin_type(), 1);
        assert_eq!(Network::Regtest.coin_type(), 1);
    }

    #[test]
    fn test_to_bitcoin() {
        assert_eq!(Network::Mainnet.to_bitcoin(), bitcoin::Network::Bitcoin);
        assert_eq!(Network::Testnet.to_bitcoin(), bitcoin::Network::Testnet);
        assert_eq!(Network::Regtest.to_bitcoin(), bitcoin::Network::Regtest);
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(
            Network::Mainnet.extended_key_prefixes(Purpose::Bip84),
            (Prefix::ZPRV, Prefix::ZPUB)
        );
        assert_eq!(
            Network::Signet.extended_key_prefixes(Purpose::Bip49),
            (UPRV, UPUB)
        );
        assert_eq!(
            Network::Testnet.extended_key_prefixes(Purpose::Bip44),
            (Prefix::TPRV, Prefix::TPUB)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Bitcoin ".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("signet".parse::<Network>().unwrap(), Network::Signet);
        assert!(matches!(
            "litecoin".parse::<Network>(),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for net in [Network::Mainnet, Network::Testnet, Network::Signet, Network::Regtest] {
            assert_eq!(net.to_string().parse::<Network>().unwrap(), net);
        }
    }
}
