//! InitializeAsset Instruction Processor
//!
//! Creates everything an asset needs in one instruction: the metadata
//! record, the mint, and the creator's holder account holding the whole
//! supply. If any step fails the transaction fails and none of it exists.

use crate::constants::{ASSET_METADATA_SEED, ASSET_MINT_SEED};
use crate::error::AssetError;
use crate::events::{AssetInitialized, Event};
use crate::processor::create_holder_account::ensure_holder_account;
use crate::state::{AssetMetadata, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process InitializeAsset instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer and creator
/// 1. `[writable]` Asset metadata PDA
/// 2. `[writable]` Asset mint PDA
/// 3. `[writable]` Creator's holder token account PDA
/// 4. `[]` System program
/// 5. `[]` Rent sysvar
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    asset_name: String,
    symbol: String,
    uri: String,
    decimals: u8,
    total_supply: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 1: Metadata
    let metadata_info = next_account_info(account_info_iter)?;

    // Account 2: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 3: Creator's holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 4: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Account 5: Rent sysvar
    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    // Validate input before touching any account
    validate_asset_params(&asset_name, &symbol, &uri, decimals, total_supply)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_writable(metadata_info)?;
    assert_writable(mint_info)?;
    assert_writable(holder_info)?;
    assert_system_program(system_program_info)?;

    // Supplied addresses must be the derived ones
    let metadata_bump = assert_derived_address(
        metadata_info,
        &[ASSET_METADATA_SEED, payer_info.key.as_ref(), asset_name.as_bytes()],
        program_id,
    )?;
    let mint_bump = assert_derived_address(
        mint_info,
        &[ASSET_MINT_SEED, payer_info.key.as_ref(), asset_name.as_bytes()],
        program_id,
    )?;

    msg!("Asset metadata: {}", metadata_info.key);
    msg!("Asset mint: {}", mint_info.key);

    // One asset per (creator, name)
    if assert_uninitialized_address(metadata_info).is_err()
        || assert_uninitialized_address(mint_info).is_err()
    {
        msg!("Asset {} already exists for {}", asset_name, payer_info.key);
        return Err(AssetError::AssetAlreadyExists.into());
    }

    // ===== Metadata =====
    let metadata_bump_seed = [metadata_bump];
    create_pda_account(
        payer_info,
        &rent,
        AssetMetadata::LEN,
        program_id,
        system_program_info,
        metadata_info,
        &[
            ASSET_METADATA_SEED,
            payer_info.key.as_ref(),
            asset_name.as_bytes(),
            &metadata_bump_seed,
        ],
    )?;

    // ===== Mint =====
    let mint_bump_seed = [mint_bump];
    create_pda_account(
        payer_info,
        &rent,
        Mint::LEN,
        program_id,
        system_program_info,
        mint_info,
        &[
            ASSET_MINT_SEED,
            payer_info.key.as_ref(),
            asset_name.as_bytes(),
            &mint_bump_seed,
        ],
    )?;

    let mut mint = Mint::new(decimals, *payer_info.key, Some(*payer_info.key));

    // ===== Holder account =====
    ensure_holder_account(
        program_id,
        payer_info,
        holder_info,
        payer_info.key,
        mint_info.key,
        system_program_info,
        &rent,
    )?;

    // ===== Mint the full supply =====
    let mut holder = load_token_account(holder_info, program_id)?;
    holder.amount = checked_add(holder.amount, total_supply)?;
    mint.supply = checked_add(mint.supply, total_supply)?;

    let metadata = AssetMetadata {
        is_initialized: true,
        creator: *payer_info.key,
        mint: *mint_info.key,
        asset_name,
        symbol,
        uri,
        decimals,
        total_supply,
        bump: metadata_bump,
    };

    // Save states
    metadata.pack(&mut metadata_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;

    AssetInitialized {
        creator: *payer_info.key,
        mint: *mint_info.key,
        total_supply,
    }
    .emit()?;

    Ok(())
}
