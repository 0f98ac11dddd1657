//! CloseStakingAccount Instruction Processor
//!
//! Closes an empty staking record and returns its rent to the staker.

use crate::constants::STAKE_ACCOUNT_SEED;
use crate::error::AssetError;
use crate::processor::stake_tokens::load_staking_account;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process CloseStakingAccount instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Staker
/// 1. `[writable]` Staking account
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Staker
    let staker_info = next_account_info(account_info_iter)?;

    // Account 1: Staking account
    let staking_info = next_account_info(account_info_iter)?;

    assert_signer(staker_info)?;
    assert_writable(staker_info)?;
    assert_owned_by(staking_info, program_id)?;
    assert_writable(staking_info)?;

    let staking = load_staking_account(staking_info, staker_info.key)?;
    assert_derived_address(
        staking_info,
        &[STAKE_ACCOUNT_SEED, staker_info.key.as_ref(), staking.mint.as_ref()],
        program_id,
    )?;

    if staking.staked_amount != 0 {
        msg!("{} units still staked", staking.staked_amount);
        return Err(AssetError::NonZeroStakedBalance.into());
    }

    close_program_account(staking_info, staker_info)
}
