//! UpdateMetadata Instruction Processor
//!
//! Replaces the URI of an asset's metadata record.

use crate::error::AssetError;
use crate::state::AssetMetadata;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process UpdateMetadata instruction
///
/// Accounts expected:
/// 0. `[signer]` Creator
/// 1. `[writable]` Asset metadata account
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], new_uri: String) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Creator
    let creator_info = next_account_info(account_info_iter)?;

    // Account 1: Metadata
    let metadata_info = next_account_info(account_info_iter)?;

    validate_uri(&new_uri)?;

    assert_owned_by(metadata_info, program_id)?;
    assert_writable(metadata_info)?;
    assert_data_length(metadata_info, AssetMetadata::LEN)?;

    let mut metadata = AssetMetadata::unpack(&metadata_info.data.borrow())?;
    if !metadata.is_initialized {
        return Err(AssetError::UninitializedAccount.into());
    }

    validate_authority(&metadata.creator, creator_info)?;

    msg!("Updating URI of {}", metadata.asset_name);
    metadata.uri = new_uri;

    metadata.pack(&mut metadata_info.data.borrow_mut())?;

    Ok(())
}
