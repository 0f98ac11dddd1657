//! Program Events
//!
//! Events are written to the transaction log with `sol_log_data` as two
//! fields: the event name, then the Borsh encoding of the event. Indexers
//! match on the first field and decode the second.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{log::sol_log_data, program_error::ProgramError, pubkey::Pubkey};

/// An event this program can log.
pub trait Event: BorshSerialize {
    /// Name written as the first log field.
    const NAME: &'static str;

    fn emit(&self) -> Result<(), ProgramError> {
        let data = borsh::to_vec(self).map_err(|_| ProgramError::BorshIoError(Self::NAME.to_string()))?;
        sol_log_data(&[Self::NAME.as_bytes(), &data]);
        Ok(())
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AssetInitialized {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub total_supply: u64,
}

impl Event for AssetInitialized {
    const NAME: &'static str = "AssetInitialized";
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Staked {
    pub staker: Pubkey,
    pub amount: u64,
}

impl Event for Staked {
    const NAME: &'static str = "Staked";
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Unstaked {
    pub staker: Pubkey,
    pub amount: u64,
}

impl Event for Unstaked {
    const NAME: &'static str = "Unstaked";
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct YieldClaimed {
    pub staker: Pubkey,
    pub amount: u64,
}

impl Event for YieldClaimed {
    const NAME: &'static str = "YieldClaimed";
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintAuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

impl Event for MintAuthorityTransferred {
    const NAME: &'static str = "MintAuthorityTransferred";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_layout() {
        let event = AssetInitialized {
            creator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            total_supply: 1_000_000,
        };

        let data = borsh::to_vec(&event).unwrap();
        assert_eq!(data.len(), 32 + 32 + 8);
        assert_eq!(&data[64..], &1_000_000u64.to_le_bytes());

        let decoded = AssetInitialized::try_from_slice(&data).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_emit_succeeds_off_chain() {
        let event = Staked {
            staker: Pubkey::new_unique(),
            amount: 5,
        };
        assert!(event.emit().is_ok());
    }
}
