//! BurnTokens Instruction Processor
//!
//! Destroys tokens held in a holder account. Used when the underlying asset
//! is redeemed.

use crate::error::AssetError;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process BurnTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Holder account to burn from
/// 1. `[writable]` Mint
/// 2. `[signer]` Holder owner
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 1: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    assert_writable(holder_info)?;
    assert_writable(mint_info)?;

    // Load states
    let mut holder = load_token_account(holder_info, program_id)?;
    let mut mint = load_mint(mint_info, program_id)?;

    if holder.mint != *mint_info.key {
        return Err(AssetError::MintMismatch.into());
    }

    if holder.is_frozen() {
        return Err(AssetError::AccountFrozen.into());
    }

    validate_owner(&holder.owner, owner_info)?;

    // Burn: balance first, so a short balance reports InsufficientFunds
    holder.amount = checked_sub(holder.amount, amount)?;
    mint.supply = checked_sub(mint.supply, amount)?;

    // Save states
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    Ok(())
}
