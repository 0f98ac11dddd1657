//! Account Creation, Loading and Closing
//!
//! Program-owned accounts at derived addresses are created through the system
//! program with `invoke_signed`, the derived address "signing" with its seeds.

use crate::error::AssetError;
use crate::state::{Mint, Pack, TokenAccount};
use crate::utils::assertions::{assert_data_length, assert_owned_by};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Create a rent-exempt account of `space` bytes at a derived address and
/// assign it to `owner`.
///
/// An unused address can still hold lamports (anyone may transfer to it), and
/// `create_account` refuses such an address. In that case the missing rent is
/// topped up and the account is allocated and assigned in separate steps.
///
/// Accounts expected in `invoke` context:
/// - `payer`: `[writable, signer]`
/// - `new_account`: `[writable]`, the derived address for `signer_seeds`
/// - `system_program`
#[allow(clippy::too_many_arguments)]
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    system_program: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space).max(1);

    if new_account.lamports() > 0 {
        let top_up = required_lamports.saturating_sub(new_account.lamports());
        if top_up > 0 {
            invoke(
                &system_instruction::transfer(payer.key, new_account.key, top_up),
                &[payer.clone(), new_account.clone(), system_program.clone()],
            )?;
        }

        invoke_signed(
            &system_instruction::allocate(new_account.key, space as u64),
            &[new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )?;

        invoke_signed(
            &system_instruction::assign(new_account.key, owner),
            &[new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )
    } else {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            &[signer_seeds],
        )
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Load an initialized mint owned by this program.
pub fn load_mint(mint_info: &AccountInfo, program_id: &Pubkey) -> Result<Mint, ProgramError> {
    assert_owned_by(mint_info, program_id)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(AssetError::UninitializedAccount.into());
    }
    Ok(mint)
}

/// Load an initialized holder token account owned by this program.
pub fn load_token_account(
    account_info: &AccountInfo,
    program_id: &Pubkey,
) -> Result<TokenAccount, ProgramError> {
    assert_owned_by(account_info, program_id)?;
    assert_data_length(account_info, TokenAccount::LEN)?;

    let account = TokenAccount::unpack_from_slice(&account_info.data.borrow())?;
    if !account.is_initialized() {
        return Err(AssetError::UninitializedAccount.into());
    }
    Ok(account)
}

// =============================================================================
// CLOSING
// =============================================================================

/// Close a program-owned account: move all lamports to `destination` and zero
/// the data. The runtime purges zero-lamport accounts at the end of the
/// transaction.
pub fn close_program_account(account: &AccountInfo, destination: &AccountInfo) -> ProgramResult {
    let account_lamports = account.lamports();
    **destination.lamports.borrow_mut() = destination
        .lamports()
        .checked_add(account_lamports)
        .ok_or(AssetError::Overflow)?;
    **account.lamports.borrow_mut() = 0;

    account.data.borrow_mut().fill(0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_foreign_and_uninitialized() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();

        let mut data = vec![0u8; TokenAccount::LEN];
        TokenAccount::new(Pubkey::new_unique(), Pubkey::new_unique())
            .pack_into_slice(&mut data)
            .unwrap();

        let mut lamports = 1u64;
        let foreign = Pubkey::new_unique();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign, false, 0);
        assert_eq!(
            load_token_account(&info, &program_id),
            Err(AssetError::InvalidAccountOwner.into())
        );

        let mut lamports = 1u64;
        let mut empty = vec![0u8; TokenAccount::LEN];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut empty, &program_id, false, 0);
        assert_eq!(
            load_token_account(&info, &program_id),
            Err(AssetError::UninitializedAccount.into())
        );

        let mut lamports = 1u64;
        let mut short = vec![0u8; Mint::LEN - 1];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut short, &program_id, false, 0);
        assert_eq!(
            load_mint(&info, &program_id),
            Err(AssetError::InvalidAccountDataLength.into())
        );
    }

    #[test]
    fn test_close_moves_lamports_and_zeroes_data() {
        let program_id = Pubkey::new_unique();
        let closing_key = Pubkey::new_unique();
        let dest_key = Pubkey::new_unique();
        let system = solana_program::system_program::id();

        let mut closing_lamports = 1_500_000u64;
        let mut closing_data = vec![7u8; 16];
        let closing = AccountInfo::new(
            &closing_key, false, true, &mut closing_lamports, &mut closing_data, &program_id,
            false, 0,
        );

        let mut dest_lamports = 10u64;
        let mut dest_data: Vec<u8> = vec![];
        let dest = AccountInfo::new(
            &dest_key, true, true, &mut dest_lamports, &mut dest_data, &system, false, 0,
        );

        close_program_account(&closing, &dest).unwrap();

        assert_eq!(closing.lamports(), 0);
        assert_eq!(dest.lamports(), 1_500_010);
        assert!(closing.data.borrow().iter().all(|b| *b == 0));
    }
}
