// wallet-core/src/lib.rs

//! HD wallet derivation core
//!
//! BIP-32 key derivation along BIP-44 / BIP-49 / BIP-84 paths
//! (`m / purpose' / coin_type' / account' / chain / index`) for Bitcoin
//! mainnet and test networks, producing keys, extended account keys and
//! legacy, wrapped-SegWit or native-SegWit addresses.
//!
//! ```no_run
//! use hdwallet_core::{HdWallet, Network, Purpose};
//!
//! # fn main() -> hdwallet_core::WalletResult<()> {
//! let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
//! let wallet = HdWallet::from_mnemonic(phrase, None, Network::Mainnet)?;
//! let address = wallet.receive_address(Purpose::Bip84)?;
//! println!("{}", address);
//! # Ok(())
//! # }
//! ```

pub mod chains;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod network;
pub mod wallet;

pub use chains::bitcoin::{Address, AddressFactory, AddressType, BitcoinAddressFactory};
pub use crypto::{Chain, HdPath, HdPrivateKey, HdPublicKey, KeyDeriver, PathSegment, Purpose, Secp256k1Deriver, Seed};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use network::Network;
pub use wallet::{AddressCursor, HdWallet, WalletConfig};
