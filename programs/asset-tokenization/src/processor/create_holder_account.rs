//! CreateHolderAccount Instruction Processor
//!
//! Creates the holder token account for an (owner, mint) pair at its derived
//! address. Running it again for the same pair changes nothing.

use crate::error::AssetError;
use crate::state::{Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process CreateHolderAccount instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Holder token account PDA
/// 2. `[]` Owner wallet
/// 3. `[]` Mint
/// 4. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 1: Holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Account 3: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 4: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_system_program(system_program_info)?;

    // Only hand out holder accounts for real mints
    load_mint(mint_info, program_id)?;

    let rent = Rent::get()?;
    ensure_holder_account(
        program_id,
        payer_info,
        holder_info,
        owner_info.key,
        mint_info.key,
        system_program_info,
        &rent,
    )
}

/// Create the holder account for (`owner`, `mint`) unless it already exists.
///
/// An existing account must be an initialized holder account for the same
/// owner and mint; it is left untouched.
pub(crate) fn ensure_holder_account<'a>(
    program_id: &Pubkey,
    payer_info: &AccountInfo<'a>,
    holder_info: &AccountInfo<'a>,
    owner: &Pubkey,
    mint: &Pubkey,
    system_program_info: &AccountInfo<'a>,
    rent: &Rent,
) -> ProgramResult {
    let bump = assert_derived_address(
        holder_info,
        &[owner.as_ref(), program_id.as_ref(), mint.as_ref()],
        program_id,
    )?;

    if holder_info.owner == program_id {
        let existing = load_token_account(holder_info, program_id)?;
        if existing.mint != *mint {
            return Err(AssetError::MintMismatch.into());
        }
        if existing.owner != *owner {
            return Err(AssetError::OwnerMismatch.into());
        }
        msg!("Holder account {} already exists", holder_info.key);
        return Ok(());
    }

    assert_uninitialized_address(holder_info)?;
    assert_writable(holder_info)?;

    let bump_seed = [bump];
    create_pda_account(
        payer_info,
        rent,
        TokenAccount::LEN,
        program_id,
        system_program_info,
        holder_info,
        &[owner.as_ref(), program_id.as_ref(), mint.as_ref(), &bump_seed],
    )?;

    TokenAccount::new(*mint, *owner).pack_into_slice(&mut holder_info.data.borrow_mut())?;

    msg!("Created holder account {}", holder_info.key);
    Ok(())
}
