//! Account State Structures
//!
//! This module defines the data structures stored in Solana accounts.
//!
//! # Account Types
//!
//! | Type | Size | Encoding | Description |
//! |------|------|----------|-------------|
//! | Mint | 82 bytes | fixed | Supply, decimals and authorities of an asset token |
//! | TokenAccount | 73 bytes | fixed | Balance of one holder for one mint |
//! | StakingAccount | 82 bytes | fixed | Stake position of one staker for one mint |
//! | AssetMetadata | 329 bytes | borsh | Name, symbol and URI of an asset |
//!
//! # Serialization
//!
//! Fixed-size records use the `Pack` trait:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! `AssetMetadata` carries variable-length strings, so it is Borsh-encoded
//! into an account allocated at the maximum encoded size.

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod asset;
pub mod mint;
pub mod staking;
pub mod token_account;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use asset::AssetMetadata;
pub use mint::Mint;
pub use staking::StakingAccount;
pub use token_account::{AccountState, TokenAccount};

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking fixed-size account state to/from bytes.
///
/// `unpack` and `pack` assume a buffer of at least `LEN` bytes; the
/// `*_slice` variants check the length exactly and are what processors use.
pub trait Pack: Sized {
    /// Serialized size in bytes.
    const LEN: usize;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION TYPE
// =============================================================================

/// C-compatible optional value, stored as a 4-byte tag plus the body.
///
/// Used for the mint's authorities so the layout stays byte-compatible with
/// SPL Token mints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}
