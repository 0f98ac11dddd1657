//! Custom Error Types
//!
//! This module defines all errors that the asset tokenization program can
//! return. Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-6 | Input validation errors |
//! | 7-12 | Account and address errors |
//! | 13-15 | Authority errors |
//! | 16-21 | Token operation errors |
//! | 22-23 | Staking errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::AssetError;
//!
//! fn some_check() -> ProgramResult {
//!     if total_supply == 0 {
//!         return Err(AssetError::ZeroSupply.into());
//!     }
//!     Ok(())
//! }
//! ```

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the asset tokenization program.
///
/// Each variant becomes `ProgramError::Custom(code)` where the code is the
/// variant's position. After deployment, never reorder these variants; add new
/// ones at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, FromPrimitive)]
pub enum AssetError {
    // =========================================================================
    // INPUT VALIDATION ERRORS (0-6)
    // =========================================================================

    /// Error 0: Instruction data could not be parsed.
    ///
    /// Unknown tag, truncated payload or a string that is not UTF-8.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 1: Asset name is empty.
    ///
    /// The name is a derivation seed; an empty name would give every creator
    /// exactly one anonymous asset.
    #[error("Asset name must not be empty")]
    EmptyAssetName,

    /// Error 2: Asset name longer than a single PDA seed (32 bytes).
    #[error("Asset name too long")]
    AssetNameTooLong,

    /// Error 3: Symbol longer than 10 bytes.
    #[error("Symbol too long")]
    SymbolTooLong,

    /// Error 4: Metadata URI longer than 200 bytes.
    #[error("URI too long")]
    UriTooLong,

    /// Error 5: Decimals outside the supported precision range.
    #[error("Invalid decimals")]
    InvalidDecimals,

    /// Error 6: Total supply of zero.
    #[error("Total supply must be greater than zero")]
    ZeroSupply,

    // =========================================================================
    // ACCOUNT AND ADDRESS ERRORS (7-12)
    // =========================================================================

    /// Error 7: An asset already occupies the derived address.
    ///
    /// A second InitializeAsset for the same (creator, asset name) lands here.
    #[error("Asset already exists")]
    AssetAlreadyExists,

    /// Error 8: Account is not owned by this program.
    #[error("Account not owned by asset tokenization program")]
    InvalidAccountOwner,

    /// Error 9: Account data has wrong length.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 10: Account is not initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    /// Error 11: Supplied account does not match the derived address.
    #[error("Account does not match derived address")]
    AddressMismatch,

    /// Error 12: No valid bump exists for the given seeds.
    #[error("Address derivation failed")]
    DerivationFailed,

    // =========================================================================
    // AUTHORITY ERRORS (13-15)
    // =========================================================================

    /// Error 13: Signer is not allowed to perform this action.
    #[error("You are not authorized to perform this action")]
    Unauthorized,

    /// Error 14: Mint authority was given away or revoked.
    #[error("Mint authority required")]
    MintAuthorityRequired,

    /// Error 15: Mint has no freeze authority.
    #[error("Freeze authority required")]
    FreezeAuthorityRequired,

    // =========================================================================
    // TOKEN OPERATION ERRORS (16-21)
    // =========================================================================

    /// Error 16: Account is frozen.
    #[error("Account is frozen")]
    AccountFrozen,

    /// Error 17: Not enough tokens for the operation.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 18: Arithmetic overflow.
    #[error("Operation caused an overflow")]
    Overflow,

    /// Error 19: Token account belongs to a different mint.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 20: Token account belongs to a different owner.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 21: Source and destination are the same account.
    #[error("Self transfer not allowed")]
    SelfTransfer,

    // =========================================================================
    // STAKING ERRORS (22-23)
    // =========================================================================

    /// Error 22: Unstaking more than is staked.
    #[error("Insufficient staked balance")]
    InsufficientStakedBalance,

    /// Error 23: Closing a staking account that still holds a stake.
    #[error("Staked balance must be zero before closing the account")]
    NonZeroStakedBalance,
}

// =============================================================================
// ERROR KINDS
// =============================================================================

/// Coarse classification of failures, as seen by a caller.
///
/// Many codes map onto a handful of kinds; callers that only care whether to
/// fix their input, pick another name, or sign differently match on this.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssetErrorKind {
    /// Malformed name, symbol, uri, decimals, supply or account list.
    InvalidInput,
    /// The derived address is already taken by an earlier initialization.
    AlreadyExists,
    /// Missing signature or wrong authority.
    AuthorizationFailure,
    /// Bump search exhausted or seeds rejected.
    DerivationFailure,
    /// A token rule refused the operation (frozen, insufficient funds...).
    OperationRejected,
    /// Failure raised by the runtime rather than this program.
    HostRejected,
}

impl AssetError {
    /// Which kind of failure this error represents.
    pub fn kind(&self) -> AssetErrorKind {
        use AssetError::*;
        match self {
            InvalidInstruction | EmptyAssetName | AssetNameTooLong | SymbolTooLong
            | UriTooLong | InvalidDecimals | ZeroSupply | InvalidAccountOwner
            | InvalidAccountDataLength | UninitializedAccount | AddressMismatch
            | MintMismatch | OwnerMismatch | SelfTransfer => AssetErrorKind::InvalidInput,
            AssetAlreadyExists => AssetErrorKind::AlreadyExists,
            Unauthorized | MintAuthorityRequired | FreezeAuthorityRequired => {
                AssetErrorKind::AuthorizationFailure
            }
            DerivationFailed => AssetErrorKind::DerivationFailure,
            AccountFrozen | InsufficientFunds | Overflow | InsufficientStakedBalance
            | NonZeroStakedBalance => AssetErrorKind::OperationRejected,
        }
    }
}

impl AssetErrorKind {
    /// Classify any `ProgramError` coming back from this program.
    ///
    /// Custom codes we recognize map through [`AssetError::kind`]; a missing
    /// signature is an authorization failure; everything else came from the
    /// host.
    pub fn of(error: &ProgramError) -> Self {
        match error {
            ProgramError::Custom(code) => AssetError::from_u32(*code)
                .map(|e| e.kind())
                .unwrap_or(AssetErrorKind::HostRejected),
            ProgramError::MissingRequiredSignature => AssetErrorKind::AuthorizationFailure,
            _ => AssetErrorKind::HostRejected,
        }
    }
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert AssetError to ProgramError so `?` and `.into()` work.
impl From<AssetError> for ProgramError {
    fn from(e: AssetError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for AssetError {
    fn type_of() -> &'static str {
        "AssetError"
    }
}

impl PrintProgramError for AssetError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ProgramError::from(AssetError::InvalidInstruction),
            ProgramError::Custom(0)
        );
        assert_eq!(
            ProgramError::from(AssetError::AssetAlreadyExists),
            ProgramError::Custom(7)
        );
        assert_eq!(
            ProgramError::from(AssetError::NonZeroStakedBalance),
            ProgramError::Custom(23)
        );
    }

    #[test]
    fn test_decode_from_code() {
        assert_eq!(AssetError::from_u32(6), Some(AssetError::ZeroSupply));
        assert_eq!(AssetError::from_u32(12), Some(AssetError::DerivationFailed));
        assert_eq!(AssetError::from_u32(99), None);
    }

    #[test]
    fn test_kind_of_program_error() {
        let already: ProgramError = AssetError::AssetAlreadyExists.into();
        assert_eq!(AssetErrorKind::of(&already), AssetErrorKind::AlreadyExists);

        let too_long: ProgramError = AssetError::AssetNameTooLong.into();
        assert_eq!(AssetErrorKind::of(&too_long), AssetErrorKind::InvalidInput);

        assert_eq!(
            AssetErrorKind::of(&ProgramError::MissingRequiredSignature),
            AssetErrorKind::AuthorizationFailure
        );
        assert_eq!(
            AssetErrorKind::of(&ProgramError::InsufficientFunds),
            AssetErrorKind::HostRejected
        );
        assert_eq!(
            AssetErrorKind::of(&ProgramError::Custom(1_000)),
            AssetErrorKind::HostRejected
        );
    }

    #[test]
    fn test_derivation_failure_kind() {
        assert_eq!(
            AssetError::DerivationFailed.kind(),
            AssetErrorKind::DerivationFailure
        );
        assert_eq!(AssetError::Unauthorized.kind(), AssetErrorKind::AuthorizationFailure);
        assert_eq!(AssetError::AccountFrozen.kind(), AssetErrorKind::OperationRejected);
    }
}
