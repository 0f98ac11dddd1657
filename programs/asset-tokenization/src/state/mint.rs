//! Mint Account State
//!
//! A Mint defines the fungible token that represents one asset. Every asset
//! created by `InitializeAsset` gets exactly one Mint, at an address derived
//! from the same (creator, asset name) pair as its metadata record.
//!
//! # What a Mint Controls
//!
//! 1. Who can create new tokens (mint_authority)
//! 2. Total tokens in existence (supply)
//! 3. How to display amounts (decimals)
//! 4. Who can freeze holder accounts (freeze_authority)
//!
//! # Size: 82 bytes (same layout as an SPL Token mint)

use crate::state::{COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 36   │ freeze_authority │ COption<Pubkey>             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The authority that can mint new tokens (yield rewards).
    ///
    /// Set to the asset creator on initialization and moved with
    /// `TransferMintAuthority`. `None` means no further minting is possible.
    pub mint_authority: COption<Pubkey>,

    /// Total number of base units in existence.
    ///
    /// Invariant: equals the sum of `amount` over every holder account of
    /// this mint.
    pub supply: u64,

    /// Number of decimal places for display purposes only.
    ///
    /// All on-chain math uses base units.
    pub decimals: u8,

    /// Whether this mint has been initialized.
    pub is_initialized: bool,

    /// The authority that can freeze/thaw holder accounts.
    pub freeze_authority: COption<Pubkey>,
}

impl Mint {
    /// Size of Mint when serialized: 36 + 8 + 1 + 1 + 36.
    pub const LEN: usize = 82;

    /// A freshly initialized mint with zero supply.
    pub fn new(decimals: u8, mint_authority: Pubkey, freeze_authority: Option<Pubkey>) -> Self {
        Mint {
            mint_authority: COption::some(mint_authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: freeze_authority.into(),
        }
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_bytes,
            supply_bytes,
            decimals_bytes,
            is_initialized_bytes,
            freeze_authority_bytes,
        ) = array_refs![input, 36, 8, 1, 1, 36];

        Ok(Mint {
            mint_authority: unpack_coption_pubkey(mint_authority_bytes)?,
            supply: u64::from_le_bytes(*supply_bytes),
            decimals: decimals_bytes[0],
            is_initialized: is_initialized_bytes[0] != 0,
            freeze_authority: unpack_coption_pubkey(freeze_authority_bytes)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_dst,
            supply_dst,
            decimals_dst,
            is_initialized_dst,
            freeze_authority_dst,
        ) = mut_array_refs![output, 36, 8, 1, 1, 36];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        pack_coption_pubkey(&self.freeze_authority, freeze_authority_dst);

        Ok(())
    }
}

// =============================================================================
// HELPER FUNCTIONS FOR COPTION<PUBKEY>
// =============================================================================

/// Unpack a COption<Pubkey> from 36 bytes: u32 LE tag (0 = None, 1 = Some)
/// followed by the key.
fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];

    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mint_has_zero_supply() {
        let authority = Pubkey::new_unique();
        let mint = Mint::new(6, authority, Some(authority));

        assert!(mint.is_initialized);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.decimals, 6);
        assert_eq!(mint.mint_authority.as_ref(), Some(&authority));
        assert_eq!(mint.freeze_authority.as_ref(), Some(&authority));
    }

    #[test]
    fn test_mint_revoked_authority_survives_packing() {
        let mint = Mint {
            mint_authority: COption::none(),
            supply: 1_000_000,
            decimals: 6,
            is_initialized: true,
            freeze_authority: COption::some(Pubkey::new_unique()),
        };

        let mut packed = [0u8; Mint::LEN];
        mint.pack(&mut packed).unwrap();

        // Tag bytes of a None authority are zero
        assert_eq!(&packed[0..4], &[0, 0, 0, 0]);
        assert_eq!(Mint::unpack(&packed).unwrap(), mint);
    }

    #[test]
    fn test_mint_uninitialized() {
        let packed = [0u8; Mint::LEN];
        let mint = Mint::unpack(&packed).unwrap();

        assert!(!mint.is_initialized);
        assert!(mint.mint_authority.is_none());
        assert_eq!(mint.supply, 0);
    }

    #[test]
    fn test_mint_wrong_size() {
        assert!(Mint::unpack_from_slice(&[0u8; 81]).is_err());
        assert!(Mint::unpack_from_slice(&[0u8; 83]).is_err());
    }

    #[test]
    fn test_mint_invalid_coption_tag() {
        let mut packed = [0u8; Mint::LEN];
        packed[0] = 2;

        assert!(Mint::unpack(&packed).is_err());
    }
}
