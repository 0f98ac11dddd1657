//! TransferMintAuthority Instruction Processor
//!
//! Hands the right to mint (yield rewards) to another key. The freeze
//! authority does not move.

use crate::error::AssetError;
use crate::events::{Event, MintAuthorityTransferred};
use crate::state::{COption, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process TransferMintAuthority instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[signer]` Current mint authority
/// 2. `[]` New mint authority
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Current authority
    let authority_info = next_account_info(account_info_iter)?;

    // Account 2: New authority
    let new_authority_info = next_account_info(account_info_iter)?;

    assert_writable(mint_info)?;

    let mut mint = load_mint(mint_info, program_id)?;

    let current_authority = mint
        .mint_authority
        .as_ref()
        .ok_or(AssetError::MintAuthorityRequired)?;

    validate_authority(current_authority, authority_info)?;

    mint.mint_authority = COption::some(*new_authority_info.key);

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    MintAuthorityTransferred {
        old_authority: *authority_info.key,
        new_authority: *new_authority_info.key,
    }
    .emit()?;

    Ok(())
}
