//! UnstakeTokens Instruction Processor
//!
//! Returns tokens from escrow to the staker. The escrow holder account is
//! owned by the escrow authority PDA; the program moves the balance itself,
//! so the check is that the supplied authority is the one derived from the
//! staking account.

use crate::constants::{ESCROW_AUTHORITY_SEED, STAKE_ACCOUNT_SEED};
use crate::error::AssetError;
use crate::events::{Event, Unstaked};
use crate::processor::stake_tokens::load_staking_account;
use crate::state::Pack;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process UnstakeTokens instruction
///
/// Accounts expected:
/// 0. `[signer]` Staker
/// 1. `[writable]` Staker's holder account
/// 2. `[writable]` Escrow holder account
/// 3. `[]` Escrow authority PDA
/// 4. `[writable]` Staking account
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Staker
    let staker_info = next_account_info(account_info_iter)?;

    // Account 1: Staker's holder account
    let staker_holder_info = next_account_info(account_info_iter)?;

    // Account 2: Escrow holder account
    let escrow_holder_info = next_account_info(account_info_iter)?;

    // Account 3: Escrow authority
    let escrow_authority_info = next_account_info(account_info_iter)?;

    // Account 4: Staking account
    let staking_info = next_account_info(account_info_iter)?;

    assert_signer(staker_info)?;
    assert_writable(staker_holder_info)?;
    assert_writable(escrow_holder_info)?;
    assert_owned_by(staking_info, program_id)?;
    assert_writable(staking_info)?;

    let mut staking = load_staking_account(staking_info, staker_info.key)?;
    assert_derived_address(
        staking_info,
        &[STAKE_ACCOUNT_SEED, staker_info.key.as_ref(), staking.mint.as_ref()],
        program_id,
    )?;
    assert_derived_address(
        escrow_authority_info,
        &[ESCROW_AUTHORITY_SEED, staking_info.key.as_ref()],
        program_id,
    )?;

    if staking.staked_amount < amount {
        return Err(AssetError::InsufficientStakedBalance.into());
    }

    // Load states
    let mut staker_holder = load_token_account(staker_holder_info, program_id)?;
    let mut escrow_holder = load_token_account(escrow_holder_info, program_id)?;

    if escrow_holder.owner != *escrow_authority_info.key {
        return Err(AssetError::OwnerMismatch.into());
    }
    if staker_holder.owner != *staker_info.key {
        return Err(AssetError::OwnerMismatch.into());
    }
    if escrow_holder.mint != staking.mint || staker_holder.mint != staking.mint {
        return Err(AssetError::MintMismatch.into());
    }
    if staker_holder.is_frozen() || escrow_holder.is_frozen() {
        return Err(AssetError::AccountFrozen.into());
    }

    escrow_holder.amount = checked_sub(escrow_holder.amount, amount)?;
    staker_holder.amount = checked_add(staker_holder.amount, amount)?;
    staking.staked_amount = checked_sub(staking.staked_amount, amount)?;

    // Save states
    escrow_holder.pack_into_slice(&mut escrow_holder_info.data.borrow_mut())?;
    staker_holder.pack_into_slice(&mut staker_holder_info.data.borrow_mut())?;
    staking.pack_into_slice(&mut staking_info.data.borrow_mut())?;

    Unstaked {
        staker: *staker_info.key,
        amount,
    }
    .emit()?;

    Ok(())
}
