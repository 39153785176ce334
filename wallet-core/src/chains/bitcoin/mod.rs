// wallet-core/src/chains/bitcoin/mod.rs

//! Bitcoin Chain Support
//!
//! Address encoding for the three BIP-43 purposes this wallet derives:
//! legacy P2PKH (BIP-44), P2SH-wrapped SegWit (BIP-49) and native SegWit (BIP-84),
//! behind the [`AddressFactory`] seam with [`BitcoinAddressFactory`] as default.

pub mod address;

// Re-exports for cleaner API access
pub use address::{Address, AddressFactory, AddressType, BitcoinAddressFactory};
