//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(account, program_id)?;
//!     assert_signer(authority)?;
//!     assert_writable(account)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::AssetError;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey, system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// Without this an attacker could hand us an account owned by their own
/// program whose bytes look like a valid Mint or holder account.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(AssetError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

/// Assert that no program has claimed this address yet.
///
/// An unused address is owned by the system program and carries no data.
/// It may already hold lamports; account creation tolerates that.
pub fn assert_uninitialized_address(account: &AccountInfo) -> ProgramResult {
    if account.owner != &system_program::id() || !account.data_is_empty() {
        Err(AssetError::AssetAlreadyExists.into())
    } else {
        Ok(())
    }
}

/// Assert that the account passed as the system program really is it.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime would reject the write anyway; this fails earlier with a
/// clearer error.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(AssetError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition; overflow becomes `AssetError::Overflow`.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or_else(|| AssetError::Overflow.into())
}

/// Checked subtraction; underflow becomes `AssetError::InsufficientFunds`.
pub fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or_else(|| AssetError::InsufficientFunds.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_success() {
        assert_eq!(checked_add(100, 200).unwrap(), 300);
        assert_eq!(checked_add(u64::MAX - 1, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(
            checked_add(u64::MAX, 1),
            Err(AssetError::Overflow.into())
        );
    }

    #[test]
    fn test_checked_sub_underflow() {
        assert_eq!(checked_sub(300, 200).unwrap(), 100);
        assert_eq!(
            checked_sub(100, 101),
            Err(AssetError::InsufficientFunds.into())
        );
    }

    #[test]
    fn test_uninitialized_address() {
        let key = Pubkey::new_unique();
        let system = system_program::id();
        let program = Pubkey::new_unique();

        // Unused address, possibly pre-funded
        let mut lamports = 5_000u64;
        let mut empty: Vec<u8> = vec![];
        let unused = AccountInfo::new(
            &key, false, true, &mut lamports, &mut empty, &system, false, 0,
        );
        assert!(assert_uninitialized_address(&unused).is_ok());

        // Address already claimed by a program
        let mut lamports = 1_000_000u64;
        let mut data = vec![0u8; 8];
        let claimed = AccountInfo::new(
            &key, false, true, &mut lamports, &mut data, &program, false, 0,
        );
        assert_eq!(
            assert_uninitialized_address(&claimed),
            Err(AssetError::AssetAlreadyExists.into())
        );
    }
}
