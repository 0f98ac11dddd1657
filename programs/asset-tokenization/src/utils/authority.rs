//! Authority Validation Utilities
//!
//! Every privileged action names the key allowed to perform it: the mint's
//! authorities, a holder account's owner, an asset's creator, a staker.
//! These helpers check that the right key was supplied AND that it signed.
//!
//! # Example Usage
//!
//! ```ignore
//! let mint_authority = mint
//!     .mint_authority
//!     .as_ref()
//!     .ok_or(AssetError::MintAuthorityRequired)?;
//!
//! validate_authority(mint_authority, authority_info)?;
//! ```

use crate::error::AssetError;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// AUTHORITY VALIDATION
// =============================================================================

/// Validate that `authority_info` is `expected_authority` and has signed.
///
/// # Returns
///
/// * `Ok(())` - Valid authority that has signed
/// * `Err(Unauthorized)` - Wrong key provided
/// * `Err(MissingRequiredSignature)` - Right key but didn't sign
pub fn validate_authority(
    expected_authority: &Pubkey,
    authority_info: &AccountInfo,
) -> ProgramResult {
    if authority_info.key != expected_authority {
        return Err(AssetError::Unauthorized.into());
    }

    if !authority_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

/// Validate the owner of a holder token account.
///
/// Same as [`validate_authority`] but reports a wrong key as `OwnerMismatch`,
/// which is what a client sending from someone else's account should see.
pub fn validate_owner(account_owner: &Pubkey, owner_info: &AccountInfo) -> ProgramResult {
    if owner_info.key != account_owner {
        return Err(AssetError::OwnerMismatch.into());
    }

    if !owner_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a mock AccountInfo for testing
    fn create_test_account_info<'a>(
        key: &'a Pubkey,
        is_signer: bool,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, is_signer, false, lamports, data, owner, false, 0)
    }

    #[test]
    fn test_authority_valid() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];

        let account = create_test_account_info(&key, true, &mut lamports, &mut data, &owner);

        assert!(validate_authority(&key, &account).is_ok());
    }

    #[test]
    fn test_authority_wrong_key() {
        let expected_key = Pubkey::new_unique();
        let wrong_key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];

        let account =
            create_test_account_info(&wrong_key, true, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_authority(&expected_key, &account),
            Err(AssetError::Unauthorized.into())
        );
    }

    #[test]
    fn test_authority_not_signer() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];

        let account = create_test_account_info(&key, false, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_authority(&key, &account),
            Err(ProgramError::MissingRequiredSignature)
        );
    }

    #[test]
    fn test_owner_mismatch() {
        let holder = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];

        let account =
            create_test_account_info(&stranger, true, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_owner(&holder, &account),
            Err(AssetError::OwnerMismatch.into())
        );
    }
}
