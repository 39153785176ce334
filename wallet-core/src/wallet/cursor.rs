// wallet-core/src/wallet/cursor.rs
//
// Chain Index Tracker
//
// Account plus external/internal address positions. A wallet keeps one for
// its implicit-index accessors; scanners can own as many as they like and pass
// them in explicitly. Nothing here advances on its own.

use crate::crypto::paths::{Chain, HARDENED_OFFSET};
use crate::error::{CryptoError, WalletResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddressCursor {
    account: u32,
    external: u32,
    internal: u32,
}

impl AddressCursor {
    /// Cursor at index 0 on both chains of `account`.
    pub fn new(account: u32) -> WalletResult<Self> {
        Ok(Self {
            account: checked(account, "account")?,
            external: 0,
            internal: 0,
        })
    }

    #[inline]
    pub fn account(&self) -> u32 {
        self.account
    }

    pub fn set_account(&mut self, account: u32) -> WalletResult<()> {
        self.account = checked(account, "account")?;
        Ok(())
    }

    #[inline]
    pub fn external_index(&self) -> u32 {
        self.external
    }

    #[inline]
    pub fn internal_index(&self) -> u32 {
        self.internal
    }

    #[inline]
    pub fn index(&self, chain: Chain) -> u32 {
        match chain {
            Chain::External => self.external,
            Chain::Internal => self.internal,
        }
    }

    pub fn set_index(&mut self, chain: Chain, index: u32) -> WalletResult<()> {
        let index = checked(index, "address index")?;
        match chain {
            Chain::External => self.external = index,
            Chain::Internal => self.internal = index,
        }
        Ok(())
    }

    /// Moves `chain` one position forward and returns the new index.
    pub fn advance(&mut self, chain: Chain) -> WalletResult<u32> {
        let next = self.index(chain).saturating_add(1);
        self.set_index(chain, next)?;
        Ok(next)
    }
}

fn checked(value: u32, what: &str) -> WalletResult<u32> {
    if value >= HARDENED_OFFSET {
        return Err(CryptoError::InvalidDerivationPath(format!(
            "{} {} is out of range (must be < 2^31)",
            what, value
        ))
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    #[test]
    fn test_defaults() {
        let cursor = AddressCursor::default();
        assert_eq!(cursor.account(), 0);
        assert_eq!(cursor.external_index(), 0);
        assert_eq!(cursor.internal_index(), 0);
    }

    #[test]
    fn test_chains_are_independent() {
        let mut cursor = AddressCursor::new(2).unwrap();
        cursor.set_index(Chain::External, 10).unwrap();
        assert_eq!(cursor.advance(Chain::Internal).unwrap(), 1);
        assert_eq!(cursor.index(Chain::External), 10);
        assert_eq!(cursor.index(Chain::Internal), 1);
        assert_eq!(cursor.account(), 2);
    }

    #[test]
    fn test_advance_stops_at_hardened_boundary() {
        let mut cursor = AddressCursor::default();
        cursor.set_index(Chain::External, HARDENED_OFFSET - 1).unwrap();
        assert!(matches!(
            cursor.advance(Chain::External),
            Err(WalletError::Crypto(CryptoError::InvalidDerivationPath(_)))
        ));
        // Failed advance leaves the position untouched
        assert_eq!(cursor.external_index(), HARDENED_OFFSET - 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut cursor = AddressCursor::default();
        assert!(AddressCursor::new(HARDENED_OFFSET).is_err());
        assert!(cursor.set_account(u32::MAX).is_err());
        assert!(cursor.set_index(Chain::Internal, HARDENED_OFFSET).is_err());
        assert_eq!(cursor, AddressCursor::default());
    }
}
