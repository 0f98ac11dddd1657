//! Transfer Instruction Processor
//!
//! Transfers tokens from one holder account to another.

use crate::error::AssetError;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process Transfer instruction
///
/// Accounts expected:
/// 0. `[writable]` Source holder account
/// 1. `[writable]` Destination holder account
/// 2. `[signer]` Source owner
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Source
    let source_info = next_account_info(account_info_iter)?;

    // Account 1: Destination
    let dest_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    assert_writable(source_info)?;
    assert_writable(dest_info)?;

    // Prevent self-transfer
    if source_info.key == dest_info.key {
        return Err(AssetError::SelfTransfer.into());
    }

    // Load states
    let mut source = load_token_account(source_info, program_id)?;
    let mut dest = load_token_account(dest_info, program_id)?;

    // Validate not frozen
    if source.is_frozen() || dest.is_frozen() {
        return Err(AssetError::AccountFrozen.into());
    }

    // Validate mints match
    if source.mint != dest.mint {
        return Err(AssetError::MintMismatch.into());
    }

    validate_owner(&source.owner, owner_info)?;

    // Transfer tokens
    source.amount = checked_sub(source.amount, amount)?;
    dest.amount = checked_add(dest.amount, amount)?;

    // Save states
    source.pack_into_slice(&mut source_info.data.borrow_mut())?;
    dest.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    Ok(())
}
