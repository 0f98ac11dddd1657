//! Asset Metadata State
//!
//! The record describing a tokenized asset. Lives at the PDA
//! `["asset-metadata", creator, asset_name]`, so there is exactly one per
//! (creator, asset name) pair.
//!
//! Unlike the token records this one holds strings, so it is Borsh-encoded.
//! The account is allocated at [`AssetMetadata::LEN`], the largest possible
//! encoding, which lets `UpdateMetadata` rewrite the URI in place.

use crate::constants::{MAX_ASSET_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Metadata for one tokenized asset.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Zero on a freshly allocated account.
    pub is_initialized: bool,
    /// Wallet that initialized the asset; the only key allowed to update it.
    pub creator: Pubkey,
    /// Mint of the asset's token.
    pub mint: Pubkey,
    pub asset_name: String,
    pub symbol: String,
    /// May be empty; stored exactly as supplied.
    pub uri: String,
    pub decimals: u8,
    /// Units minted at initialization.
    pub total_supply: u64,
    /// Bump of this record's own address.
    pub bump: u8,
}

impl AssetMetadata {
    /// Largest Borsh encoding: strings are a u32 length prefix plus bytes.
    pub const LEN: usize = 1
        + 32
        + 32
        + (4 + MAX_ASSET_NAME_LEN)
        + (4 + MAX_SYMBOL_LEN)
        + (4 + MAX_URI_LEN)
        + 1
        + 8
        + 1;

    /// Decode from account data. Trailing zero padding is ignored.
    pub fn unpack(src: &[u8]) -> Result<Self, ProgramError> {
        let mut cursor = src;
        Self::deserialize(&mut cursor).map_err(|_| ProgramError::InvalidAccountData)
    }

    /// Encode into account data and zero whatever the encoding does not cover.
    pub fn pack(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        let encoded = borsh::to_vec(self).map_err(|_| ProgramError::InvalidAccountData)?;
        if encoded.len() > dst.len() {
            return Err(ProgramError::AccountDataTooSmall);
        }
        let (head, tail) = dst.split_at_mut(encoded.len());
        head.copy_from_slice(&encoded);
        tail.fill(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_bar() -> AssetMetadata {
        AssetMetadata {
            is_initialized: true,
            creator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            asset_name: "Gold-Bar-001".to_string(),
            symbol: "GLD".to_string(),
            uri: String::new(),
            decimals: 6,
            total_supply: 1_000_000,
            bump: 255,
        }
    }

    #[test]
    fn test_len_matches_largest_encoding() {
        let largest = AssetMetadata {
            asset_name: "n".repeat(MAX_ASSET_NAME_LEN),
            symbol: "s".repeat(MAX_SYMBOL_LEN),
            uri: "u".repeat(MAX_URI_LEN),
            ..gold_bar()
        };
        assert_eq!(borsh::to_vec(&largest).unwrap().len(), AssetMetadata::LEN);
        assert_eq!(AssetMetadata::LEN, 329);
    }

    #[test]
    fn test_empty_uri_stays_empty() {
        let record = gold_bar();
        let mut data = vec![0u8; AssetMetadata::LEN];
        record.pack(&mut data).unwrap();

        let decoded = AssetMetadata::unpack(&data).unwrap();
        assert_eq!(decoded.uri, "");
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_shorter_rewrite_clears_stale_bytes() {
        let mut record = gold_bar();
        record.uri = "https://example.com/metadata.json".to_string();
        let mut data = vec![0u8; AssetMetadata::LEN];
        record.pack(&mut data).unwrap();

        record.uri = String::new();
        record.pack(&mut data).unwrap();

        let used = borsh::to_vec(&record).unwrap().len();
        assert!(data[used..].iter().all(|b| *b == 0));
        assert_eq!(AssetMetadata::unpack(&data).unwrap().uri, "");
    }

    #[test]
    fn test_zeroed_account_is_uninitialized() {
        let data = vec![0u8; AssetMetadata::LEN];
        let decoded = AssetMetadata::unpack(&data).unwrap();
        assert!(!decoded.is_initialized);
        assert!(decoded.asset_name.is_empty());
    }

    #[test]
    fn test_pack_into_too_small_buffer() {
        let mut data = vec![0u8; 16];
        assert_eq!(
            gold_bar().pack(&mut data),
            Err(ProgramError::AccountDataTooSmall)
        );
    }
}
