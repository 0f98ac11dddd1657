//! ClaimYield Instruction Processor
//!
//! Mints the yield accrued on a stake position since the last claim:
//! `elapsed_seconds * YIELD_RATE_PER_SECOND` base units, paid into the
//! staker's holder account. New units are minted, so the mint authority has
//! to co-sign.

use crate::constants::{STAKE_ACCOUNT_SEED, YIELD_RATE_PER_SECOND};
use crate::error::AssetError;
use crate::events::{Event, YieldClaimed};
use crate::processor::stake_tokens::load_staking_account;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

/// Process ClaimYield instruction
///
/// Accounts expected:
/// 0. `[signer]` Staker
/// 1. `[writable]` Staking account
/// 2. `[writable]` Mint
/// 3. `[writable]` Staker's holder account
/// 4. `[signer]` Mint authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Staker
    let staker_info = next_account_info(account_info_iter)?;

    // Account 1: Staking account
    let staking_info = next_account_info(account_info_iter)?;

    // Account 2: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 3: Reward destination
    let holder_info = next_account_info(account_info_iter)?;

    // Account 4: Mint authority
    let authority_info = next_account_info(account_info_iter)?;

    assert_signer(staker_info)?;
    assert_owned_by(staking_info, program_id)?;
    assert_writable(staking_info)?;
    assert_writable(mint_info)?;
    assert_writable(holder_info)?;

    assert_derived_address(
        staking_info,
        &[STAKE_ACCOUNT_SEED, staker_info.key.as_ref(), mint_info.key.as_ref()],
        program_id,
    )?;
    let mut staking = load_staking_account(staking_info, staker_info.key)?;

    // Load states
    let mut mint = load_mint(mint_info, program_id)?;
    let mut holder = load_token_account(holder_info, program_id)?;

    if holder.mint != *mint_info.key {
        return Err(AssetError::MintMismatch.into());
    }
    if holder.owner != *staker_info.key {
        return Err(AssetError::OwnerMismatch.into());
    }
    if holder.is_frozen() {
        return Err(AssetError::AccountFrozen.into());
    }

    let mint_authority = mint
        .mint_authority
        .as_ref()
        .ok_or(AssetError::MintAuthorityRequired)?;
    validate_authority(mint_authority, authority_info)?;

    // A clock behind the last claim pays nothing
    let now = Clock::get()?.unix_timestamp;
    let elapsed = now.saturating_sub(staking.last_claimed_time).max(0) as u64;
    let accrued = elapsed
        .checked_mul(YIELD_RATE_PER_SECOND)
        .ok_or(AssetError::Overflow)?;

    msg!("Yield: {} seconds, {} units", elapsed, accrued);

    holder.amount = checked_add(holder.amount, accrued)?;
    mint.supply = checked_add(mint.supply, accrued)?;
    staking.last_claimed_time = now;

    // Save states
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    staking.pack_into_slice(&mut staking_info.data.borrow_mut())?;

    YieldClaimed {
        staker: *staker_info.key,
        amount: accrued,
    }
    .emit()?;

    Ok(())
}
