//! Program Constants
//!
//! Seeds for every derived address and the limits enforced on instruction
//! input. Changing a seed changes every address derived from it, so these are
//! fixed once the program is deployed.

use solana_program::pubkey::MAX_SEED_LEN;

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Namespace tag for the asset metadata record.
pub const ASSET_METADATA_SEED: &[u8] = b"asset-metadata";

/// Namespace tag for the asset's mint.
pub const ASSET_MINT_SEED: &[u8] = b"asset-mint";

/// Namespace tag for a staker's record.
pub const STAKE_ACCOUNT_SEED: &[u8] = b"stake-account";

/// Namespace tag for the authority that owns a staking escrow.
pub const ESCROW_AUTHORITY_SEED: &[u8] = b"escrow-authority";

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Asset name is used verbatim as a seed, so it is bounded by the seed limit.
pub const MAX_ASSET_NAME_LEN: usize = MAX_SEED_LEN;

pub const MAX_SYMBOL_LEN: usize = 10;

pub const MAX_URI_LEN: usize = 200;

/// Highest precision a mint may declare (matches native SOL).
pub const MAX_DECIMALS: u8 = 9;

// =============================================================================
// STAKING
// =============================================================================

/// Reward units minted per second per staking account.
pub const YIELD_RATE_PER_SECOND: u64 = 10;
