//! Program-Derived Addresses
//!
//! Every account this program creates lives at an address computed from
//! seeds, so clients can find it without an index and nobody holds a private
//! key for it.
//!
//! | Account | Seeds |
//! |---------|-------|
//! | Asset metadata | `"asset-metadata"`, creator, asset name |
//! | Asset mint | `"asset-mint"`, creator, asset name |
//! | Holder token account | owner, program id, mint |
//! | Staking account | `"stake-account"`, staker, mint |
//! | Escrow authority | `"escrow-authority"`, staking account |

use crate::constants::{
    ASSET_METADATA_SEED, ASSET_MINT_SEED, ESCROW_AUTHORITY_SEED, STAKE_ACCOUNT_SEED,
};
use crate::error::AssetError;
use solana_program::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::{Pubkey, PubkeyError, MAX_SEEDS},
};

// =============================================================================
// BUMP SEARCH
// =============================================================================

/// Derive the canonical program address for `seeds`.
///
/// Tries bumps from 255 down to 0 and returns the first address that falls
/// off the ed25519 curve, together with that bump.
///
/// # Errors
///
/// `DerivationFailed` when every bump lands on the curve, or when the seeds
/// themselves are rejected (a seed over 32 bytes, or too many seeds to append
/// a bump).
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    if seeds.len() >= MAX_SEEDS {
        return Err(AssetError::DerivationFailed.into());
    }

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut seeds_with_bump = seeds.to_vec();
        seeds_with_bump.push(&bump_seed);

        match Pubkey::create_program_address(&seeds_with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            // On the curve: try the next bump
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(_) => break,
        }
    }

    Err(AssetError::DerivationFailed.into())
}

// =============================================================================
// TYPED DERIVATIONS
// =============================================================================

/// Address of the metadata record for `asset_name` created by `creator`.
pub fn find_asset_metadata_address(
    creator: &Pubkey,
    asset_name: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[ASSET_METADATA_SEED, creator.as_ref(), asset_name.as_bytes()],
        program_id,
    )
}

/// Address of the mint for `asset_name` created by `creator`.
pub fn find_asset_mint_address(
    creator: &Pubkey,
    asset_name: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[ASSET_MINT_SEED, creator.as_ref(), asset_name.as_bytes()],
        program_id,
    )
}

/// Address of `owner`'s holder token account for `mint`.
pub fn find_holder_account_address(
    owner: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(&[owner.as_ref(), program_id.as_ref(), mint.as_ref()], program_id)
}

pub fn find_staking_account_address(
    staker: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[STAKE_ACCOUNT_SEED, staker.as_ref(), mint.as_ref()],
        program_id,
    )
}

/// Authority that owns the escrow holder account of a staking position.
pub fn find_escrow_authority_address(
    staking_account: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(&[ESCROW_AUTHORITY_SEED, staking_account.as_ref()], program_id)
}

// =============================================================================
// CHECKS
// =============================================================================

/// Assert that `account` sits at the address derived from `seeds` and return
/// the bump needed to sign for it.
pub fn assert_derived_address(
    account: &AccountInfo,
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = derive_address(seeds, program_id)?;
    if *account.key != expected {
        msg!("Expected derived address {}, got {}", expected, account.key);
        return Err(AssetError::AddressMismatch.into());
    }
    Ok(bump)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_ASSET_NAME_LEN;

    #[test]
    fn test_derivation_is_deterministic() {
        let program_id = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let first = find_asset_metadata_address(&creator, "Gold-Bar-001", &program_id).unwrap();
        let second = find_asset_metadata_address(&creator, "Gold-Bar-001", &program_id).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_runtime_canonical_bump() {
        let program_id = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let ours = find_asset_mint_address(&creator, "Gold-Bar-001", &program_id).unwrap();
        let runtime = Pubkey::find_program_address(
            &[ASSET_MINT_SEED, creator.as_ref(), b"Gold-Bar-001"],
            &program_id,
        );

        assert_eq!(ours, runtime);
    }

    #[test]
    fn test_namespace_tags_are_disjoint() {
        let program_id = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let (metadata, _) = find_asset_metadata_address(&creator, "Gold-Bar-001", &program_id).unwrap();
        let (mint, _) = find_asset_mint_address(&creator, "Gold-Bar-001", &program_id).unwrap();

        assert_ne!(metadata, mint);
    }

    #[test]
    fn test_creator_and_name_both_matter() {
        let program_id = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (a, _) = find_asset_metadata_address(&alice, "Gold-Bar-001", &program_id).unwrap();
        let (b, _) = find_asset_metadata_address(&bob, "Gold-Bar-001", &program_id).unwrap();
        let (c, _) = find_asset_metadata_address(&alice, "Gold-Bar-002", &program_id).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let program_id = Pubkey::new_unique();
        let (address, _) =
            find_holder_account_address(&Pubkey::new_unique(), &Pubkey::new_unique(), &program_id)
                .unwrap();

        assert!(!address.is_on_curve());
    }

    #[test]
    fn test_oversized_seed_fails_with_derivation_error() {
        let program_id = Pubkey::new_unique();
        let name = "x".repeat(MAX_ASSET_NAME_LEN + 1);

        assert_eq!(
            find_asset_metadata_address(&Pubkey::new_unique(), &name, &program_id),
            Err(AssetError::DerivationFailed.into())
        );
    }

    #[test]
    fn test_too_many_seeds() {
        let program_id = Pubkey::new_unique();
        let seed: &[u8] = b"s";
        let seeds = vec![seed; MAX_SEEDS];

        assert_eq!(
            derive_address(&seeds, &program_id),
            Err(AssetError::DerivationFailed.into())
        );
    }

    #[test]
    fn test_assert_derived_address() {
        let program_id = Pubkey::new_unique();
        let staking = Pubkey::new_unique();
        let (escrow, bump) = find_escrow_authority_address(&staking, &program_id).unwrap();
        let seeds: &[&[u8]] = &[ESCROW_AUTHORITY_SEED, staking.as_ref()];

        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];
        let owner = Pubkey::default();
        let account = AccountInfo::new(&escrow, false, false, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(assert_derived_address(&account, seeds, &program_id), Ok(bump));

        let wrong = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = vec![];
        let account = AccountInfo::new(&wrong, false, false, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            assert_derived_address(&account, seeds, &program_id),
            Err(AssetError::AddressMismatch.into())
        );
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY SEARCH FOR A BUMP?
======================

create_program_address hashes (seeds || program_id || "ProgramDerivedAddress")
with SHA-256 and rejects the result if it is a valid ed25519 point, because a
point on the curve might have a private key. Roughly half of all hashes land
on the curve, so we append one extra seed byte and walk it down from 255:

    bump = 255  ->  on curve   -> try again
    bump = 254  ->  off curve  -> done, (address, 254)

The first bump that works is the "canonical" bump. Always using the canonical
one means there is exactly one valid address per seed tuple, which is what
makes "one asset per (creator, name)" enforceable.

Running out of bumps has probability about 2^-256. It is still a defined
error (DerivationFailed), never a panic.

WHY THE TAG IS THE FIRST SEED
=============================

    ["asset-metadata", creator, name]
    ["asset-mint",     creator, name]

Different tags feed different bytes into the hash, so the metadata and mint
addresses for the same asset are unrelated. Seeds are concatenated before
hashing; "asset-mint" and "asset-metadata" already differ at byte 7, so no
(creator, name) pair under one tag can produce the same hash input as a pair
under the other.

SEED LIMITS
===========

Each seed is at most 32 bytes (MAX_SEED_LEN) and there are at most 16 seeds
(MAX_SEEDS) including the bump. The asset name is used as a raw seed, which is
why names are capped at 32 bytes before we ever get here.
*/
