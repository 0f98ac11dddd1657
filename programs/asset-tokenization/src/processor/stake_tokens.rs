//! StakeTokens Instruction Processor
//!
//! Moves tokens from the staker's holder account into an escrow holder
//! account owned by the position's escrow authority PDA. The staking record
//! and the escrow account are created on the first stake.

use crate::constants::{ESCROW_AUTHORITY_SEED, STAKE_ACCOUNT_SEED};
use crate::error::AssetError;
use crate::events::{Event, Staked};
use crate::processor::create_holder_account::ensure_holder_account;
use crate::state::{Pack, StakingAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process StakeTokens instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Staker
/// 1. `[writable]` Staker's holder account
/// 2. `[writable]` Escrow holder account
/// 3. `[]` Escrow authority PDA
/// 4. `[]` Mint
/// 5. `[writable]` Staking account PDA
/// 6. `[]` System program
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

    // Account 4: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 5: Staking account
    let staking_info = next_account_info(account_info_iter)?;

    // Account 6: System program
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(staker_info)?;
    assert_writable(staker_holder_info)?;
    assert_writable(escrow_holder_info)?;
    assert_writable(staking_info)?;
    assert_system_program(system_program_info)?;

    load_mint(mint_info, program_id)?;

    let staking_bump = assert_derived_address(
        staking_info,
        &[STAKE_ACCOUNT_SEED, staker_info.key.as_ref(), mint_info.key.as_ref()],
        program_id,
    )?;
    assert_derived_address(
        escrow_authority_info,
        &[ESCROW_AUTHORITY_SEED, staking_info.key.as_ref()],
        program_id,
    )?;

    let rent = Rent::get()?;

    // ===== Staking record =====
    let mut staking = if staking_info.owner == program_id {
        load_staking_account(staking_info, staker_info.key)?
    } else {
        assert_uninitialized_address(staking_info)?;
        let bump_seed = [staking_bump];
        create_pda_account(
            staker_info,
            &rent,
            StakingAccount::LEN,
            program_id,
            system_program_info,
            staking_info,
            &[
                STAKE_ACCOUNT_SEED,
                staker_info.key.as_ref(),
                mint_info.key.as_ref(),
                &bump_seed,
            ],
        )?;
        msg!("Created staking account {}", staking_info.key);
        StakingAccount::new(*staker_info.key, *mint_info.key, staking_bump)
    };

    // ===== Escrow =====
    ensure_holder_account(
        program_id,
        staker_info,
        escrow_holder_info,
        escrow_authority_info.key,
        mint_info.key,
        system_program_info,
        &rent,
    )?;

    // ===== Move tokens =====
    let mut staker_holder = load_token_account(staker_holder_info, program_id)?;
    let mut escrow_holder = load_token_account(escrow_holder_info, program_id)?;

    if staker_holder.mint != *mint_info.key {
        return Err(AssetError::MintMismatch.into());
    }
    if staker_holder.is_frozen() || escrow_holder.is_frozen() {
        return Err(AssetError::AccountFrozen.into());
    }
    validate_owner(&staker_holder.owner, staker_info)?;

    staker_holder.amount = checked_sub(staker_holder.amount, amount)?;
    escrow_holder.amount = checked_add(escrow_holder.amount, amount)?;
    staking.staked_amount = checked_add(staking.staked_amount, amount)?;

    // Yield accrues from the first stake
    if staking.last_claimed_time == 0 {
        staking.last_claimed_time = Clock::get()?.unix_timestamp;
    }

    // Save states
    staker_holder.pack_into_slice(&mut staker_holder_info.data.borrow_mut())?;
    escrow_holder.pack_into_slice(&mut escrow_holder_info.data.borrow_mut())?;
    staking.pack_into_slice(&mut staking_info.data.borrow_mut())?;

    Staked {
        staker: *staker_info.key,
        amount,
    }
    .emit()?;

    Ok(())
}

/// Load an existing staking record and check it belongs to `staker`.
pub(crate) fn load_staking_account(
    staking_info: &AccountInfo,
    staker: &Pubkey,
) -> Result<StakingAccount, ProgramError> {
    assert_data_length(staking_info, StakingAccount::LEN)?;

    let staking = StakingAccount::unpack_from_slice(&staking_info.data.borrow())?;
    if !staking.is_initialized {
        return Err(AssetError::UninitializedAccount.into());
    }
    if staking.staker != *staker {
        return Err(AssetError::Unauthorized.into());
    }
    Ok(staking)
}
