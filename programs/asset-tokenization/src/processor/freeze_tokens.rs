//! FreezeTokens Instruction Processor
//!
//! Freezes a holder account. A frozen account cannot send, receive or burn
//! tokens. Freezing an already frozen account is a no-op.

use crate::error::AssetError;
use crate::state::{AccountState, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process FreezeTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Holder account to freeze
/// 1. `[]` Mint
/// 2. `[signer]` Freeze authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 1: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Freeze authority
    let authority_info = next_account_info(account_info_iter)?;

    assert_writable(holder_info)?;

    // Load states
    let mut holder = load_token_account(holder_info, program_id)?;
    let mint = load_mint(mint_info, program_id)?;

    // Validate account is for this mint
    if holder.mint != *mint_info.key {
        return Err(AssetError::MintMismatch.into());
    }

    // Get freeze authority
    let freeze_authority = mint
        .freeze_authority
        .as_ref()
        .ok_or(AssetError::FreezeAuthorityRequired)?;

    validate_authority(freeze_authority, authority_info)?;

    holder.state = AccountState::Frozen;

    // Save account
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;

    Ok(())
}
