// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-43 family path composer
// BIP-44 (Legacy), BIP-49 (Nested SegWit), BIP-84 (Native SegWit)
//
//   m / purpose' / coin_type' / account' / chain / address_index
//
// The first three levels are always hardened, the last two never are.

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, DerivationPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    /// Shared by every test network.
    pub const TESTNET: u32 = 1;
}

/// Offset added to a raw index for hardened derivation (2^31).
pub const HARDENED_OFFSET: u32 = ChildNumber::HARDENED_FLAG;

// =============================================================================
// PURPOSE / CHAIN
// =============================================================================
/// BIP purpose level, selecting the address convention of the subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// BIP-44 legacy P2PKH (`1...`)
    Bip44 = 44,
    /// BIP-49 P2SH-wrapped SegWit (`3...`)
    Bip49 = 49,
    /// BIP-84 native SegWit (`bc1q...`)
    Bip84 = 84,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Bip44, Purpose::Bip49, Purpose::Bip84];

    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Purpose {
    type Error = WalletError;

    fn try_from(value: u32) -> WalletResult<Self> {
        match value {
            44 => Ok(Purpose::Bip44),
            49 => Ok(Purpose::Bip49),
            84 => Ok(Purpose::Bip84),
            other => Err(CryptoError::InvalidDerivationPath(format!(
                "unsupported purpose {}",
                other
            ))
            .into()),
        }
    }
}

/// Chain level: `0` receiving (external), `1` change (internal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    External = 0,
    Internal = 1,
}

impl Chain {
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

// =============================================================================
// PATH SEGMENT
// =============================================================================
/// One level of a derivation path: a raw index below 2^31 plus a hardened flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment(ChildNumber);

impl PathSegment {
    /// Fails when `index` already carries the hardened bit, since such a value
    /// is ambiguous in either form.
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        ChildNumber::new(index, hardened).map(Self).map_err(|_| {
            CryptoError::InvalidDerivationPath(format!(
                "index {} is out of range (must be < 2^31)",
                index
            ))
            .into()
        })
    }

    #[inline]
    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::new(index, true)
    }

    #[inline]
    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::new(index, false)
    }

    /// Raw index without the hardened offset.
    #[inline]
    pub fn index(&self) -> u32 {
        self.0.index()
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.0.is_hardened()
    }

    /// Index as fed to CKD: raw index plus 2^31 when hardened.
    #[inline]
    pub fn child_index(&self) -> u32 {
        self.0.into()
    }

    #[inline]
    pub fn child_number(&self) -> ChildNumber {
        self.0
    }
}

impl From<PathSegment> for ChildNumber {
    fn from(segment: PathSegment) -> Self {
        segment.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PathSegment {
    type Err = WalletError;

    /// Accepts `'` and `h` as hardened markers.
    fn from_str(s: &str) -> WalletResult<Self> {
        s.parse::<ChildNumber>()
            .map(Self)
            .map_err(|e| CryptoError::InvalidDerivationPath(format!("bad path segment '{}': {}", s, e)).into())
    }
}

// =============================================================================
// HD PATH
// =============================================================================
/// Structured derivation path, validated at construction.
///
/// # Conventions
/// - Account level: `m/purpose'/coin_type'/account'`
/// - Address level: `m/purpose'/coin_type'/account'/chain/index`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HdPath(DerivationPath);

impl HdPath {
    /// BIP-32 serializes depth as a single byte.
    pub const MAX_DEPTH: usize = u8::MAX as usize;

    /// Master node `m`.
    #[inline]
    pub fn master() -> Self {
        Self::default()
    }

    /// Account-level path `m/purpose'/coin_type'/account'`.
    pub fn account(purpose: Purpose, coin_type: u32, account: u32) -> WalletResult<Self> {
        Self::master()
            .child(PathSegment::hardened(purpose.value())?)?
            .child(PathSegment::hardened(coin_type)?)?
            .child(PathSegment::hardened(account)?)
    }

    /// Chain-level path `m/purpose'/coin_type'/account'/chain`.
    pub fn chain(purpose: Purpose, coin_type: u32, account: u32, chain: Chain) -> WalletResult<Self> {
        Self::account(purpose, coin_type, account)?.child(PathSegment::normal(chain.value())?)
    }

    /// Address-level path `m/purpose'/coin_type'/account'/chain/index`.
    pub fn address(
        purpose: Purpose,
        coin_type: u32,
        account: u32,
        chain: Chain,
        index: u32,
    ) -> WalletResult<Self> {
        Self::chain(purpose, coin_type, account, chain)?.child(PathSegment::normal(index)?)
    }

    /// New path with `segment` appended.
    pub fn child(mut self, segment: PathSegment) -> WalletResult<Self> {
        if self.0.len() >= Self::MAX_DEPTH {
            return Err(CryptoError::InvalidDerivationPath("path deeper than 255 levels".into()).into());
        }
        self.0.push(segment.child_number());
        Ok(self)
    }

    pub fn segments(&self) -> impl Iterator<Item = PathSegment> + '_ {
        self.0.iter().map(PathSegment)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_derivation_path(&self) -> &DerivationPath {
        &self.0
    }

    /// True for `p'/c'/a'` or `p'/c'/a'/chain/index` with a known purpose and
    /// a chain of 0 or 1.
    pub fn is_bip44_shaped(&self) -> bool {
        let s: &[ChildNumber] = self.0.as_ref();
        let head_ok = s.len() >= 3
            && s[..3].iter().all(ChildNumber::is_hardened)
            && Purpose::try_from(s[0].index()).is_ok();
        match s.len() {
            3 => head_ok,
            5 => head_ok && !s[3].is_hardened() && s[3].index() <= 1 && !s[4].is_hardened(),
            _ => false,
        }
    }

    /// Purpose level of a BIP-44 shaped path.
    pub fn purpose(&self) -> Option<Purpose> {
        self.segments()
            .next()
            .filter(PathSegment::is_hardened)
            .and_then(|s| Purpose::try_from(s.index()).ok())
    }
}

impl From<HdPath> for DerivationPath {
    fn from(path: HdPath) -> Self {
        path.0
    }
}

impl fmt::Display for HdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for HdPath {
    type Err = WalletError;

    /// Parses `m/44'/0'/0'/0/0`; `h` is accepted as a hardened marker.
    fn from_str(s: &str) -> WalletResult<Self> {
        let path = s
            .trim()
            .parse::<DerivationPath>()
            .map_err(|e| CryptoError::InvalidDerivationPath(format!("bad path '{}': {}", s, e)))?;
        if path.len() > Self::MAX_DEPTH {
            return Err(CryptoError::InvalidDerivationPath("path deeper than 255 levels".into()).into());
        }
        Ok(Self(path))
    }
}

// =============================================================================
// TESTS
// =============================================================================
