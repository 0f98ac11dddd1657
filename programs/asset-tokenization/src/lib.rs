//! # Real-World Asset Tokenization
//!
//! A Solana program that issues a fungible token representing a real-world
//! asset (a gold bar, a property share, a bond).
//!
//! ## Overview
//!
//! `InitializeAsset` does the whole issuance in one transaction:
//! - Derive the metadata and mint addresses from (creator, asset name)
//! - Create the metadata record and the mint
//! - Create the creator's holder account and mint the full supply into it
//!
//! The program keeps its own mint and holder-account state, so the token
//! operations (transfer, burn, freeze, thaw, authority hand-over) and the
//! staking escrow are instructions of this program too.
//!
//! ## Account Types
//!
//! | Account Type | Size | Address |
//! |--------------|------|---------|
//! | AssetMetadata | 329 bytes | `["asset-metadata", creator, name]` |
//! | Mint | 82 bytes | `["asset-mint", creator, name]` |
//! | TokenAccount | 73 bytes | `[owner, program_id, mint]` |
//! | StakingAccount | 82 bytes | `["stake-account", staker, mint]` |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | InitializeAsset | Create metadata, mint and creator holdings |
//! | 1 | UpdateMetadata | Replace the metadata URI |
//! | 2 | CreateHolderAccount | Create a holder account (idempotent) |
//! | 3 | Transfer | Transfer tokens |
//! | 4 | BurnTokens | Burn tokens |
//! | 5 | FreezeTokens | Freeze a holder account |
//! | 6 | ThawTokens | Thaw a frozen holder account |
//! | 7 | TransferMintAuthority | Hand minting rights to another key |
//! | 8 | StakeTokens | Move tokens into escrow |
//! | 9 | ClaimYield | Mint accrued yield |
//! | 10 | UnstakeTokens | Return tokens from escrow |
//! | 11 | CloseStakingAccount | Close an empty stake position |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Balance formatting for clients
pub mod balance;

/// Seeds and input limits
pub mod constants;

/// Program entrypoint
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Log events
pub mod events;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Instruction processors
pub mod processor;

/// Account state structures
pub mod state;

/// Validation, derivation and account helpers
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use balance::TokenAmount;
pub use error::{AssetError, AssetErrorKind};
pub use instruction::AssetInstruction;
pub use processor::Processor;
pub use state::{AccountState, AssetMetadata, Mint, Pack, StakingAccount, TokenAccount};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("C2A1Q5DjAnLbCAjWhJo3pXBi7UgnLYPc4TDJ5qTSNmpp");
