// wallet-core/src/wallet/mod.rs

//! HD Wallet - path derivation manager
//!
//! Ties the pieces together for one seed on one network:
//!
//! ```text
//! purpose + cursor ──▶ HdPath ──KeyDeriver──▶ HdPrivateKey ──▶ HdPublicKey ──AddressFactory──▶ Address
//! ```
//!
//! Every accessor takes the BIP purpose as an argument; nothing about the
//! purpose is remembered between calls. Account and chain positions come from
//! an [`AddressCursor`], either the wallet's own or one supplied by the caller.

mod config;
mod cursor;

pub use config::WalletConfig;
pub use cursor::AddressCursor;

use crate::chains::bitcoin::{Address, AddressFactory, BitcoinAddressFactory};
use crate::crypto::key_deriver::{HdPrivateKey, HdPublicKey, KeyDeriver, Secp256k1Deriver};
use crate::crypto::paths::{Chain, HdPath, PathSegment, Purpose, HARDENED_OFFSET};
use crate::crypto::seed::Seed;
use crate::error::{CryptoError, WalletResult};
use crate::network::Network;
use std::ops::Range;
use tracing::debug;
use zeroize::Zeroizing;

#[derive(Debug)]
pub struct HdWallet<D = Secp256k1Deriver, F = BitcoinAddressFactory> {
    seed: Seed,
    network: Network,
    coin_type: u32,
    cursor: AddressCursor,
    deriver: D,
    address_factory: F,
}

impl HdWallet {
    /// Wallet on `network` with BIP-32 secp256k1 derivation and `bitcoin` address encoding.
    pub fn new(seed: Seed, network: Network) -> Self {
        Self::with_collaborators(seed, network, Secp256k1Deriver, BitcoinAddressFactory)
    }

    pub fn with_config(seed: Seed, config: &WalletConfig) -> WalletResult<Self> {
        let mut wallet = Self::new(seed, config.network);
        wallet.set_account(config.account)?;
        Ok(wallet)
    }

    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>, network: Network) -> WalletResult<Self> {
        Ok(Self::new(Seed::from_mnemonic(phrase, passphrase)?, network))
    }
}

impl<D: KeyDeriver, F: AddressFactory> HdWallet<D, F> {
    pub fn with_collaborators(seed: Seed, network: Network, deriver: D, address_factory: F) -> Self {
        Self {
            seed,
            network,
            coin_type: network.coin_type(),
            cursor: AddressCursor::default(),
            deriver,
            address_factory,
        }
    }

    // =========================================================================
    // STATE
    // =========================================================================

    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    /// Fixed at construction from the network.
    #[inline]
    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    #[inline]
    pub fn cursor(&self) -> &AddressCursor {
        &self.cursor
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut AddressCursor {
        &mut self.cursor
    }

    #[inline]
    pub fn account(&self) -> u32 {
        self.cursor.account()
    }

    pub fn set_account(&mut self, account: u32) -> WalletResult<()> {
        self.cursor.set_account(account)
    }

    #[inline]
    pub fn external_index(&self) -> u32 {
        self.cursor.external_index()
    }

    pub fn set_external_index(&mut self, index: u32) -> WalletResult<()> {
        self.cursor.set_index(Chain::External, index)
    }

    #[inline]
    pub fn internal_index(&self) -> u32 {
        self.cursor.internal_index()
    }

    pub fn set_internal_index(&mut self, index: u32) -> WalletResult<()> {
        self.cursor.set_index(Chain::Internal, index)
    }

    // =========================================================================
    // PATHS
    // =========================================================================

    /// `m/purpose'/coin_type'/account'` for the wallet's current account.
    pub fn account_path(&self, purpose: Purpose) -> WalletResult<HdPath> {
        HdPath::account(purpose, self.coin_type, self.cursor.account())
    }

    /// `m/purpose'/coin_type'/account'/chain/index` for the wallet's current account.
    pub fn address_path(&self, purpose: Purpose, chain: Chain, index: u32) -> WalletResult<HdPath> {
        HdPath::address(purpose, self.coin_type, self.cursor.account(), chain, index)
    }

    // =========================================================================
    // RECEIVE / CHANGE ADDRESSES
    // =========================================================================

    /// External-chain address at the wallet's current external index.
    pub fn receive_address(&self, purpose: Purpose) -> WalletResult<Address> {
        self.receive_address_with(&self.cursor, purpose)
    }

    pub fn receive_address_at(&self, purpose: Purpose, index: u32) -> WalletResult<Address> {
        self.address_at(purpose, self.cursor.account(), Chain::External, index)
    }

    /// External-chain address at `cursor`'s account and external index.
    pub fn receive_address_with(&self, cursor: &AddressCursor, purpose: Purpose) -> WalletResult<Address> {
        self.address_at(purpose, cursor.account(), Chain::External, cursor.external_index())
    }

    /// Internal-chain address at the wallet's current internal index.
    pub fn change_address(&self, purpose: Purpose) -> WalletResult<Address> {
        self.change_address_with(&self.cursor, purpose)
    }

    pub fn change_address_at(&self, purpose: Purpose, index: u32) -> WalletResult<Address> {
        self.address_at(purpose, self.cursor.account(), Chain::Internal, index)
    }

    pub fn change_address_with(&self, cursor: &AddressCursor, purpose: Purpose) -> WalletResult<Address> {
        self.address_at(purpose, cursor.account(), Chain::Internal, cursor.internal_index())
    }

    /// Addresses for a run of indices on one chain of the current account.
    ///
    /// Derives down to the chain node once and fans out from there. A range
    /// reaching past the last non-hardened index is rejected before any
    /// derivation happens.
    pub fn addresses(&self, purpose: Purpose, chain: Chain, indices: Range<u32>) -> WalletResult<Vec<Address>> {
        if indices.end > HARDENED_OFFSET {
            return Err(CryptoError::InvalidDerivationPath(format!(
                "address range {:?} extends past index 2^31 - 1",
                indices
            ))
            .into());
        }
        let chain_path = HdPath::chain(purpose, self.coin_type, self.cursor.account(), chain)?;
        let chain_key = self.deriver.derive(&self.seed, &chain_path)?;
        debug!(path = %chain_path, ?indices, "deriving address batch");

        indices
            .map(|index| {
                let key = chain_key.derive_child(PathSegment::normal(index)?)?;
                self.encode(&key.public_key(), purpose)
            })
            .collect()
    }

    // =========================================================================
    // ADDRESS-LEVEL KEYS (external chain)
    // =========================================================================

    pub fn private_key(&self, purpose: Purpose) -> WalletResult<HdPrivateKey> {
        self.private_key_with(&self.cursor, purpose)
    }

    pub fn private_key_at(&self, purpose: Purpose, index: u32) -> WalletResult<HdPrivateKey> {
        self.derive(&self.address_path(purpose, Chain::External, index)?)
    }

    pub fn private_key_with(&self, cursor: &AddressCursor, purpose: Purpose) -> WalletResult<HdPrivateKey> {
        let path = HdPath::address(
            purpose,
            self.coin_type,
            cursor.account(),
            Chain::External,
            cursor.external_index(),
        )?;
        self.derive(&path)
    }

    pub fn public_key(&self, purpose: Purpose) -> WalletResult<HdPublicKey> {
        self.public_key_with(&self.cursor, purpose)
    }

    pub fn public_key_at(&self, purpose: Purpose, index: u32) -> WalletResult<HdPublicKey> {
        Ok(self.private_key_at(purpose, index)?.public_key())
    }

    pub fn public_key_with(&self, cursor: &AddressCursor, purpose: Purpose) -> WalletResult<HdPublicKey> {
        Ok(self.private_key_with(cursor, purpose)?.public_key())
    }

    // =========================================================================
    // ACCOUNT-LEVEL KEYS
    // =========================================================================

    /// Account extended private key `m/purpose'/coin_type'/account'`.
    pub fn account_private_key(&self, purpose: Purpose) -> WalletResult<HdPrivateKey> {
        self.derive(&self.account_path(purpose)?)
    }

    pub fn account_public_key(&self, purpose: Purpose) -> WalletResult<HdPublicKey> {
        Ok(self.account_private_key(purpose)?.public_key())
    }

    /// Account public key serialized with its SLIP-132 prefix (`xpub`/`ypub`/`zpub`,
    /// or `tpub`/`upub`/`vpub` off mainnet). Suitable for watch-only import.
    pub fn account_xpub(&self, purpose: Purpose) -> WalletResult<String> {
        let (_, public) = self.network.extended_key_prefixes(purpose);
        Ok(self.account_public_key(purpose)?.to_extended_string(public))
    }

    /// Account private key serialized with its SLIP-132 prefix.
    pub fn account_xprv(&self, purpose: Purpose) -> WalletResult<Zeroizing<String>> {
        let (private, _) = self.network.extended_key_prefixes(purpose);
        Ok(self.account_private_key(purpose)?.to_extended_string(private))
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn derive(&self, path: &HdPath) -> WalletResult<HdPrivateKey> {
        debug!(%path, network = %self.network, "deriving key");
        self.deriver.derive(&self.seed, path)
    }

    fn address_at(&self, purpose: Purpose, account: u32, chain: Chain, index: u32) -> WalletResult<Address> {
        let path = HdPath::address(purpose, self.coin_type, account, chain, index)?;
        let key = self.derive(&path)?;
        self.encode(&key.public_key(), purpose)
    }

    fn encode(&self, public_key: &HdPublicKey, purpose: Purpose) -> WalletResult<Address> {
        self.address_factory
            .encode(public_key, self.network, purpose.into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
