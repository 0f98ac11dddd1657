//! Staking Account State
//!
//! One record per (staker, mint). Tracks how many units sit in escrow and
//! when yield was last paid out.

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Stake position.
///
/// ```text
/// is_initialized(1) | staker(32) | mint(32) | staked_amount(8)
/// | last_claimed_time(8) | bump(1)                     = 82 bytes
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakingAccount {
    pub is_initialized: bool,
    pub staker: Pubkey,
    pub mint: Pubkey,
    /// Units currently held in escrow for this staker.
    pub staked_amount: u64,
    /// Unix timestamp of the first stake or the last yield claim.
    pub last_claimed_time: i64,
    pub bump: u8,
}

impl StakingAccount {
    pub const LEN: usize = 82;

    pub fn new(staker: Pubkey, mint: Pubkey, bump: u8) -> Self {
        StakingAccount {
            is_initialized: true,
            staker,
            mint,
            staked_amount: 0,
            last_claimed_time: 0,
            bump,
        }
    }
}

impl Pack for StakingAccount {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, StakingAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, staker, mint, staked_amount, last_claimed_time, bump) =
            array_refs![input, 1, 32, 32, 8, 8, 1];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(StakingAccount {
            is_initialized,
            staker: Pubkey::new_from_array(*staker),
            mint: Pubkey::new_from_array(*mint),
            staked_amount: u64::from_le_bytes(*staked_amount),
            last_claimed_time: i64::from_le_bytes(*last_claimed_time),
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, StakingAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, staker_dst, mint_dst, staked_dst, last_claimed_dst, bump_dst) =
            mut_array_refs![output, 1, 32, 32, 8, 8, 1];

        is_initialized_dst[0] = self.is_initialized as u8;
        staker_dst.copy_from_slice(self.staker.as_ref());
        mint_dst.copy_from_slice(self.mint.as_ref());
        *staked_dst = self.staked_amount.to_le_bytes();
        *last_claimed_dst = self.last_claimed_time.to_le_bytes();
        bump_dst[0] = self.bump;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_timestamp_survives_packing() {
        let mut account = StakingAccount::new(Pubkey::new_unique(), Pubkey::new_unique(), 254);
        account.staked_amount = 500;
        account.last_claimed_time = -1;

        let mut packed = [0u8; StakingAccount::LEN];
        account.pack_into_slice(&mut packed).unwrap();

        assert_eq!(StakingAccount::unpack_from_slice(&packed).unwrap(), account);
    }

    #[test]
    fn test_invalid_initialized_flag() {
        let mut packed = [0u8; StakingAccount::LEN];
        packed[0] = 7;
        assert!(StakingAccount::unpack(&packed).is_err());
    }
}
