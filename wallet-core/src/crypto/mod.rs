// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Seed**: owned, zeroizing master seed, optionally from a BIP-39 phrase via [`Seed`].
//! - **Derivation Paths**: structured BIP-44/49/84 paths via [`HdPath`].
//! - **Key Derivation**: BIP-32 behind the [`KeyDeriver`] seam, secp256k1 via [`Secp256k1Deriver`].

pub mod key_deriver;
pub mod paths;
pub mod seed;

// Re-exports for cleaner API access
pub use key_deriver::{HdPrivateKey, HdPublicKey, KeyDeriver, Secp256k1Deriver};
pub use paths::{coin_type, Chain, HdPath, PathSegment, Purpose, HARDENED_OFFSET};
pub use seed::Seed;
