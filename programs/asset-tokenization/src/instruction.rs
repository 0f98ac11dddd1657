//! Instruction Types
//!
//! This module defines all instructions supported by the asset tokenization
//! program, their wire format, and builder functions that fill in every
//! derived address for clients and tests.
//!
//! # Instruction Format
//!
//! ```text
//! [tag: u8][data: varies]
//! ```
//!
//! Integers are little-endian. Strings are a `u32` little-endian byte length
//! followed by UTF-8 bytes (the same encoding Borsh uses).
//!
//! # Tag Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitializeAsset |
//! | 1 | UpdateMetadata |
//! | 2 | CreateHolderAccount |
//! | 3 | Transfer |
//! | 4 | BurnTokens |
//! | 5 | FreezeTokens |
//! | 6 | ThawTokens |
//! | 7 | TransferMintAuthority |
//! | 8 | StakeTokens |
//! | 9 | ClaimYield |
//! | 10 | UnstakeTokens |
//! | 11 | CloseStakingAccount |

use crate::error::AssetError;
use crate::utils::derivation::{
    find_asset_metadata_address, find_asset_mint_address, find_escrow_authority_address,
    find_holder_account_address, find_staking_account_address,
};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program, sysvar,
};

// =============================================================================
// ASSET INSTRUCTION ENUM
// =============================================================================

/// Instructions supported by the asset tokenization program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetInstruction {
    // =========================================================================
    // ASSET LIFECYCLE
    // =========================================================================

    /// Create an asset: metadata record, mint, and the creator's holder
    /// account holding the whole supply.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Payer and creator
    /// 1. `[writable]` Asset metadata PDA `["asset-metadata", payer, asset_name]`
    /// 2. `[writable]` Asset mint PDA `["asset-mint", payer, asset_name]`
    /// 3. `[writable]` Payer's holder token account for the mint
    /// 4. `[]` System program
    /// 5. `[]` Rent sysvar
    InitializeAsset {
        asset_name: String,
        symbol: String,
        uri: String,
        decimals: u8,
        total_supply: u64,
    },

    /// Replace the metadata URI. Only the creator may do this.
    ///
    /// Accounts expected:
    /// 0. `[signer]` Creator
    /// 1. `[writable]` Asset metadata account
    UpdateMetadata { new_uri: String },

    // =========================================================================
    // TOKEN OPERATIONS
    // =========================================================================

    /// Create the holder token account for (owner, mint) if it does not
    /// exist. Succeeds without changes when it already does.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Holder token account PDA
    /// 2. `[]` Owner wallet
    /// 3. `[]` Mint
    /// 4. `[]` System program
    CreateHolderAccount,

    /// Move tokens between two holder accounts of the same mint.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Source holder account
    /// 1. `[writable]` Destination holder account
    /// 2. `[signer]` Source owner
    Transfer { amount: u64 },

    /// Destroy tokens, decreasing the mint's supply.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Holder account to burn from
    /// 1. `[writable]` Mint
    /// 2. `[signer]` Holder owner
    BurnTokens { amount: u64 },

    /// Accounts expected:
    /// 0. `[writable]` Holder account to freeze
    /// 1. `[]` Mint
    /// 2. `[signer]` Freeze authority
    FreezeTokens,

    /// Accounts expected:
    /// 0. `[writable]` Frozen holder account
    /// 1. `[]` Mint
    /// 2. `[signer]` Freeze authority
    ThawTokens,

    /// Hand minting rights to another key.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Mint
    /// 1. `[signer]` Current mint authority
    /// 2. `[]` New mint authority
    TransferMintAuthority,

    // =========================================================================
    // STAKING
    // =========================================================================

    /// Move tokens into escrow, creating the staking record and the escrow
    /// holder account on first use.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Staker
    /// 1. `[writable]` Staker's holder account
    /// 2. `[writable]` Escrow holder account (owned by the escrow authority)
    /// 3. `[]` Escrow authority PDA
    /// 4. `[]` Mint
    /// 5. `[writable]` Staking account PDA
    /// 6. `[]` System program
    StakeTokens { amount: u64 },

    /// Mint the yield accrued since the last claim to the staker.
    ///
    /// Accounts expected:
    /// 0. `[signer]` Staker
    /// 1. `[writable]` Staking account
    /// 2. `[writable]` Mint
    /// 3. `[writable]` Staker's holder account
    /// 4. `[signer]` Mint authority
    ClaimYield,

    /// Return tokens from escrow to the staker.
    ///
    /// Accounts expected:
    /// 0. `[signer]` Staker
    /// 1. `[writable]` Staker's holder account
    /// 2. `[writable]` Escrow holder account
    /// 3. `[]` Escrow authority PDA
    /// 4. `[writable]` Staking account
    UnstakeTokens { amount: u64 },

    /// Close an empty staking record and refund its rent.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Staker
    /// 1. `[writable]` Staking account
    CloseStakingAccount,
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl AssetInstruction {
    /// Parse instruction data. Bytes after the last field are ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&tag, rest) = input
            .split_first()
            .ok_or(AssetError::InvalidInstruction)?;

        Ok(match tag {
            0 => {
                let (asset_name, rest) = unpack_string(rest)?;
                let (symbol, rest) = unpack_string(rest)?;
                let (uri, rest) = unpack_string(rest)?;
                let (&decimals, rest) = rest
                    .split_first()
                    .ok_or(AssetError::InvalidInstruction)?;
                let (total_supply, _rest) = unpack_u64(rest)?;

                AssetInstruction::InitializeAsset {
                    asset_name,
                    symbol,
                    uri,
                    decimals,
                    total_supply,
                }
            }
            1 => {
                let (new_uri, _rest) = unpack_string(rest)?;
                AssetInstruction::UpdateMetadata { new_uri }
            }
            2 => AssetInstruction::CreateHolderAccount,
            3 => {
                let (amount, _rest) = unpack_u64(rest)?;
                AssetInstruction::Transfer { amount }
            }
            4 => {
                let (amount, _rest) = unpack_u64(rest)?;
                AssetInstruction::BurnTokens { amount }
            }
            5 => AssetInstruction::FreezeTokens,
            6 => AssetInstruction::ThawTokens,
            7 => AssetInstruction::TransferMintAuthority,
            8 => {
                let (amount, _rest) = unpack_u64(rest)?;
                AssetInstruction::StakeTokens { amount }
            }
            9 => AssetInstruction::ClaimYield,
            10 => {
                let (amount, _rest) = unpack_u64(rest)?;
                AssetInstruction::UnstakeTokens { amount }
            }
            11 => AssetInstruction::CloseStakingAccount,
            _ => return Err(AssetError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            AssetInstruction::InitializeAsset {
                asset_name,
                symbol,
                uri,
                decimals,
                total_supply,
            } => {
                buf.push(0);
                pack_string(asset_name, &mut buf);
                pack_string(symbol, &mut buf);
                pack_string(uri, &mut buf);
                buf.push(*decimals);
                buf.extend_from_slice(&total_supply.to_le_bytes());
            }
            AssetInstruction::UpdateMetadata { new_uri } => {
                buf.push(1);
                pack_string(new_uri, &mut buf);
            }
            AssetInstruction::CreateHolderAccount => buf.push(2),
            AssetInstruction::Transfer { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            AssetInstruction::BurnTokens { amount } => {
                buf.push(4);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            AssetInstruction::FreezeTokens => buf.push(5),
            AssetInstruction::ThawTokens => buf.push(6),
            AssetInstruction::TransferMintAuthority => buf.push(7),
            AssetInstruction::StakeTokens { amount } => {
                buf.push(8);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            AssetInstruction::ClaimYield => buf.push(9),
            AssetInstruction::UnstakeTokens { amount } => {
                buf.push(10);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            AssetInstruction::CloseStakingAccount => buf.push(11),
        }

        buf
    }
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    if input.len() < 8 {
        return Err(AssetError::InvalidInstruction.into());
    }
    let (bytes, rest) = input.split_at(8);
    let value = u64::from_le_bytes(
        bytes
            .try_into()
            .map_err(|_| AssetError::InvalidInstruction)?,
    );
    Ok((value, rest))
}

fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
    if input.len() < 4 {
        return Err(AssetError::InvalidInstruction.into());
    }
    let (len_bytes, rest) = input.split_at(4);
    let len = u32::from_le_bytes(
        len_bytes
            .try_into()
            .map_err(|_| AssetError::InvalidInstruction)?,
    ) as usize;

    if rest.len() < len {
        return Err(AssetError::InvalidInstruction.into());
    }
    let (bytes, rest) = rest.split_at(len);
    let value = String::from_utf8(bytes.to_vec()).map_err(|_| AssetError::InvalidInstruction)?;
    Ok((value, rest))
}

fn pack_string(value: &str, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build `InitializeAsset` with the metadata, mint and holder addresses
/// derived from `payer` and `asset_name`.
pub fn initialize_asset(
    program_id: &Pubkey,
    payer: &Pubkey,
    asset_name: &str,
    symbol: &str,
    uri: &str,
    decimals: u8,
    total_supply: u64,
) -> Result<Instruction, ProgramError> {
    let (metadata, _) = find_asset_metadata_address(payer, asset_name, program_id)?;
    let (mint, _) = find_asset_mint_address(payer, asset_name, program_id)?;
    let (holder, _) = find_holder_account_address(payer, &mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(metadata, false),
            AccountMeta::new(mint, false),
            AccountMeta::new(holder, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: AssetInstruction::InitializeAsset {
            asset_name: asset_name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
            decimals,
            total_supply,
        }
        .pack(),
    })
}

pub fn update_metadata(
    program_id: &Pubkey,
    creator: &Pubkey,
    asset_name: &str,
    new_uri: &str,
) -> Result<Instruction, ProgramError> {
    let (metadata, _) = find_asset_metadata_address(creator, asset_name, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*creator, true),
            AccountMeta::new(metadata, false),
        ],
        data: AssetInstruction::UpdateMetadata {
            new_uri: new_uri.to_string(),
        }
        .pack(),
    })
}

pub fn create_holder_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (holder, _) = find_holder_account_address(owner, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(holder, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: AssetInstruction::CreateHolderAccount.pack(),
    })
}

/// Transfer between the holder accounts of `source_owner` and
/// `destination_owner`.
pub fn transfer(
    program_id: &Pubkey,
    mint: &Pubkey,
    source_owner: &Pubkey,
    destination_owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (source, _) = find_holder_account_address(source_owner, mint, program_id)?;
    let (destination, _) = find_holder_account_address(destination_owner, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(source, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*source_owner, true),
        ],
        data: AssetInstruction::Transfer { amount }.pack(),
    })
}

pub fn burn_tokens(
    program_id: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (holder, _) = find_holder_account_address(owner, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(holder, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data: AssetInstruction::BurnTokens { amount }.pack(),
    })
}

pub fn freeze_tokens(
    program_id: &Pubkey,
    mint: &Pubkey,
    holder_owner: &Pubkey,
    freeze_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    freeze_or_thaw(
        program_id,
        mint,
        holder_owner,
        freeze_authority,
        AssetInstruction::FreezeTokens,
    )
}

pub fn thaw_tokens(
    program_id: &Pubkey,
    mint: &Pubkey,
    holder_owner: &Pubkey,
    freeze_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    freeze_or_thaw(
        program_id,
        mint,
        holder_owner,
        freeze_authority,
        AssetInstruction::ThawTokens,
    )
}

fn freeze_or_thaw(
    program_id: &Pubkey,
    mint: &Pubkey,
    holder_owner: &Pubkey,
    freeze_authority: &Pubkey,
    instruction: AssetInstruction,
) -> Result<Instruction, ProgramError> {
    let (holder, _) = find_holder_account_address(holder_owner, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(holder, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*freeze_authority, true),
        ],
        data: instruction.pack(),
    })
}

pub fn transfer_mint_authority(
    program_id: &Pubkey,
    mint: &Pubkey,
    current_authority: &Pubkey,
    new_authority: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*current_authority, true),
            AccountMeta::new_readonly(*new_authority, false),
        ],
        data: AssetInstruction::TransferMintAuthority.pack(),
    }
}

pub fn stake_tokens(
    program_id: &Pubkey,
    staker: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (staker_holder, _) = find_holder_account_address(staker, mint, program_id)?;
    let (staking_account, _) = find_staking_account_address(staker, mint, program_id)?;
    let (escrow_authority, _) = find_escrow_authority_address(&staking_account, program_id)?;
    let (escrow_holder, _) = find_holder_account_address(&escrow_authority, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*staker, true),
            AccountMeta::new(staker_holder, false),
            AccountMeta::new(escrow_holder, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(staking_account, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: AssetInstruction::StakeTokens { amount }.pack(),
    })
}

pub fn claim_yield(
    program_id: &Pubkey,
    staker: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (staker_holder, _) = find_holder_account_address(staker, mint, program_id)?;
    let (staking_account, _) = find_staking_account_address(staker, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*staker, true),
            AccountMeta::new(staking_account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(staker_holder, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data: AssetInstruction::ClaimYield.pack(),
    })
}

pub fn unstake_tokens(
    program_id: &Pubkey,
    staker: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (staker_holder, _) = find_holder_account_address(staker, mint, program_id)?;
    let (staking_account, _) = find_staking_account_address(staker, mint, program_id)?;
    let (escrow_authority, _) = find_escrow_authority_address(&staking_account, program_id)?;
    let (escrow_holder, _) = find_holder_account_address(&escrow_authority, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*staker, true),
            AccountMeta::new(staker_holder, false),
            AccountMeta::new(escrow_holder, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new(staking_account, false),
        ],
        data: AssetInstruction::UnstakeTokens { amount }.pack(),
    })
}

pub fn close_staking_account(
    program_id: &Pubkey,
    staker: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (staking_account, _) = find_staking_account_address(staker, mint, program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*staker, true),
            AccountMeta::new(staking_account, false),
        ],
        data: AssetInstruction::CloseStakingAccount.pack(),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_asset_wire_format() {
        let ix = AssetInstruction::InitializeAsset {
            asset_name: "Gold-Bar-001".to_string(),
            symbol: "GLD".to_string(),
            uri: String::new(),
            decimals: 6,
            total_supply: 1_000_000,
        };
        let packed = ix.pack();

        let mut expected = vec![0u8];
        expected.extend_from_slice(&12u32.to_le_bytes());
        expected.extend_from_slice(b"Gold-Bar-001");
        expected.extend_from_slice(&3u32.to_le_bytes());
        expected.extend_from_slice(b"GLD");
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.push(6);
        expected.extend_from_slice(&1_000_000u64.to_le_bytes());

        assert_eq!(packed, expected);
        assert_eq!(AssetInstruction::unpack(&packed).unwrap(), ix);
    }

    #[test]
    fn test_empty_data_fails() {
        assert_eq!(
            AssetInstruction::unpack(&[]),
            Err(AssetError::InvalidInstruction.into())
        );
    }

    #[test]
    fn test_unknown_tag_fails() {
        assert!(AssetInstruction::unpack(&[12]).is_err());
        assert!(AssetInstruction::unpack(&[255]).is_err());
    }

    #[test]
    fn test_truncated_amount_fails() {
        assert!(AssetInstruction::unpack(&[3, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_string_length_past_end_fails() {
        let mut data = vec![1u8];
        data.extend_from_slice(&10u32.to_le_bytes());
        data.extend_from_slice(b"short");
        assert!(AssetInstruction::unpack(&data).is_err());
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let mut data = vec![1u8];
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(
            AssetInstruction::unpack(&data),
            Err(AssetError::InvalidInstruction.into())
        );
    }

    #[test]
    fn test_initialize_asset_builder_accounts() {
        let program_id = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let ix = initialize_asset(&program_id, &payer, "Gold-Bar-001", "GLD", "", 6, 1_000_000)
            .unwrap();

        let (metadata, _) = find_asset_metadata_address(&payer, "Gold-Bar-001", &program_id).unwrap();
        let (mint, _) = find_asset_mint_address(&payer, "Gold-Bar-001", &program_id).unwrap();
        let (holder, _) = find_holder_account_address(&payer, &mint, &program_id).unwrap();

        assert_eq!(ix.accounts.len(), 6);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, metadata);
        assert_eq!(ix.accounts[2].pubkey, mint);
        assert_eq!(ix.accounts[3].pubkey, holder);
        assert_eq!(ix.accounts[4].pubkey, system_program::id());
        assert_eq!(ix.accounts[5].pubkey, sysvar::rent::id());
    }

    #[test]
    fn test_staking_builders_agree_on_escrow() {
        let program_id = Pubkey::new_unique();
        let staker = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let stake = stake_tokens(&program_id, &staker, &mint, 10).unwrap();
        let unstake = unstake_tokens(&program_id, &staker, &mint, 10).unwrap();

        // escrow holder and escrow authority
        assert_eq!(stake.accounts[2].pubkey, unstake.accounts[2].pubkey);
        assert_eq!(stake.accounts[3].pubkey, unstake.accounts[3].pubkey);
        assert_eq!(stake.accounts[5].pubkey, unstake.accounts[4].pubkey);
    }
}
