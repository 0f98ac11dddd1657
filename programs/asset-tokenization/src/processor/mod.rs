//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file.

pub mod burn;
pub mod claim_yield;
pub mod close_staking_account;
pub mod create_holder_account;
pub mod freeze_tokens;
pub mod initialize_asset;
pub mod stake_tokens;
pub mod thaw_tokens;
pub mod transfer;
pub mod transfer_mint_authority;
pub mod unstake_tokens;
pub mod update_metadata;

use crate::instruction::AssetInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process an asset tokenization instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = AssetInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            AssetInstruction::InitializeAsset {
                asset_name,
                symbol,
                uri,
                decimals,
                total_supply,
            } => {
                msg!("Instruction: InitializeAsset");
                initialize_asset::process(
                    program_id,
                    accounts,
                    asset_name,
                    symbol,
                    uri,
                    decimals,
                    total_supply,
                )
            }

            AssetInstruction::UpdateMetadata { new_uri } => {
                msg!("Instruction: UpdateMetadata");
                update_metadata::process(program_id, accounts, new_uri)
            }

            AssetInstruction::CreateHolderAccount => {
                msg!("Instruction: CreateHolderAccount");
                create_holder_account::process(program_id, accounts)
            }

            AssetInstruction::Transfer { amount } => {
                msg!("Instruction: Transfer");
                transfer::process(program_id, accounts, amount)
            }

            AssetInstruction::BurnTokens { amount } => {
                msg!("Instruction: BurnTokens");
                burn::process(program_id, accounts, amount)
            }

            AssetInstruction::FreezeTokens => {
                msg!("Instruction: FreezeTokens");
                freeze_tokens::process(program_id, accounts)
            }

            AssetInstruction::ThawTokens => {
                msg!("Instruction: ThawTokens");
                thaw_tokens::process(program_id, accounts)
            }

            AssetInstruction::TransferMintAuthority => {
                msg!("Instruction: TransferMintAuthority");
                transfer_mint_authority::process(program_id, accounts)
            }

            AssetInstruction::StakeTokens { amount } => {
                msg!("Instruction: StakeTokens");
                stake_tokens::process(program_id, accounts, amount)
            }

            AssetInstruction::ClaimYield => {
                msg!("Instruction: ClaimYield");
                claim_yield::process(program_id, accounts)
            }

            AssetInstruction::UnstakeTokens { amount } => {
                msg!("Instruction: UnstakeTokens");
                unstake_tokens::process(program_id, accounts, amount)
            }

            AssetInstruction::CloseStakingAccount => {
                msg!("Instruction: CloseStakingAccount");
                close_staking_account::process(program_id, accounts)
            }
        }
    }
}
