//! Instruction Input Validation
//!
//! Bounds come from the record layout (`AssetMetadata::LEN`) and from the
//! PDA seed limit on the asset name.

use crate::constants::{MAX_ASSET_NAME_LEN, MAX_DECIMALS, MAX_SYMBOL_LEN, MAX_URI_LEN};
use crate::error::AssetError;
use solana_program::entrypoint::ProgramResult;

/// Validate every argument of `InitializeAsset`.
///
/// Lengths are in bytes, not characters. An empty URI is accepted.
pub fn validate_asset_params(
    asset_name: &str,
    symbol: &str,
    uri: &str,
    decimals: u8,
    total_supply: u64,
) -> ProgramResult {
    if asset_name.is_empty() {
        return Err(AssetError::EmptyAssetName.into());
    }
    if asset_name.len() > MAX_ASSET_NAME_LEN {
        return Err(AssetError::AssetNameTooLong.into());
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(AssetError::SymbolTooLong.into());
    }
    validate_uri(uri)?;
    if decimals > MAX_DECIMALS {
        return Err(AssetError::InvalidDecimals.into());
    }
    if total_supply == 0 {
        return Err(AssetError::ZeroSupply.into());
    }
    Ok(())
}

pub fn validate_uri(uri: &str) -> ProgramResult {
    if uri.len() > MAX_URI_LEN {
        return Err(AssetError::UriTooLong.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::program_error::ProgramError;

    fn err(e: AssetError) -> ProgramResult {
        Err(ProgramError::from(e))
    }

    #[test]
    fn test_gold_bar_is_valid() {
        assert!(validate_asset_params("Gold-Bar-001", "GLD", "", 6, 1_000_000).is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let name = "n".repeat(MAX_ASSET_NAME_LEN);
        let symbol = "S".repeat(MAX_SYMBOL_LEN);
        let uri = "u".repeat(MAX_URI_LEN);

        assert!(validate_asset_params(&name, &symbol, &uri, MAX_DECIMALS, u64::MAX).is_ok());
        assert!(validate_asset_params("a", "", "", 0, 1).is_ok());
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate_asset_params("", "GLD", "", 6, 1), err(AssetError::EmptyAssetName));
        assert_eq!(
            validate_asset_params(&"n".repeat(MAX_ASSET_NAME_LEN + 1), "GLD", "", 6, 1),
            err(AssetError::AssetNameTooLong)
        );
        assert_eq!(
            validate_asset_params("Gold", &"S".repeat(MAX_SYMBOL_LEN + 1), "", 6, 1),
            err(AssetError::SymbolTooLong)
        );
        assert_eq!(
            validate_asset_params("Gold", "GLD", &"u".repeat(MAX_URI_LEN + 1), 6, 1),
            err(AssetError::UriTooLong)
        );
        assert_eq!(
            validate_asset_params("Gold", "GLD", "", MAX_DECIMALS + 1, 1),
            err(AssetError::InvalidDecimals)
        );
        assert_eq!(validate_asset_params("Gold", "GLD", "", 6, 0), err(AssetError::ZeroSupply));
    }

    #[test]
    fn test_length_is_counted_in_bytes() {
        // 11 characters but 33 bytes
        let name = "金".repeat(11);
        assert_eq!(
            validate_asset_params(&name, "GLD", "", 6, 1),
            err(AssetError::AssetNameTooLong)
        );
    }
}
