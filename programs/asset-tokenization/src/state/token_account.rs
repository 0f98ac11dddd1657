//! Holder Token Account State
//!
//! A holder token account stores one owner's balance of one asset mint. Its
//! address is derived from (owner, program id, mint), so a wallet has at most
//! one holder account per asset and anyone can compute where it lives.
//!
//! # Size: 73 bytes

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// Lifecycle state of a holder account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Freshly allocated, all zeros.
    #[default]
    Uninitialized,

    /// Ready for use.
    Initialized,

    /// Frozen by the mint's freeze authority; cannot send, burn or stake.
    Frozen,
}

impl AccountState {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            2 => Ok(AccountState::Frozen),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
        }
    }
}

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Holder token account data.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ Offset │ Size │ Field  │ Type            │
/// ├────────┼──────┼────────┼─────────────────┤
/// │ 0      │ 32   │ mint   │ Pubkey          │
/// │ 32     │ 32   │ owner  │ Pubkey          │
/// │ 64     │ 8    │ amount │ u64             │
/// │ 72     │ 1    │ state  │ AccountState    │
/// └──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TokenAccount {
    /// The mint this account holds.
    pub mint: Pubkey,

    /// The wallet (or PDA) allowed to move these tokens.
    pub owner: Pubkey,

    /// Balance in base units.
    pub amount: u64,

    pub state: AccountState,
}

impl TokenAccount {
    pub const LEN: usize = 73;

    /// An initialized, empty holder account.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        TokenAccount {
            mint,
            owner,
            amount: 0,
            state: AccountState::Initialized,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    pub fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenAccount {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, state) = array_refs![input, 32, 32, 8, 1];

        Ok(TokenAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            state: AccountState::from_u8(state[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, state_dst) =
            mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        state_dst[0] = self.state.to_u8();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_layout_offsets() {
        let account = TokenAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 1_000_000,
            state: AccountState::Frozen,
        };

        let mut packed = [0u8; TokenAccount::LEN];
        account.pack(&mut packed).unwrap();

        assert_eq!(&packed[0..32], account.mint.as_ref());
        assert_eq!(&packed[32..64], account.owner.as_ref());
        assert_eq!(&packed[64..72], &1_000_000u64.to_le_bytes());
        assert_eq!(packed[72], 2);
        assert_eq!(TokenAccount::unpack(&packed).unwrap(), account);
    }

    #[test]
    fn test_new_account_is_initialized_and_empty() {
        let account = TokenAccount::new(Pubkey::new_unique(), Pubkey::new_unique());

        assert!(account.is_initialized());
        assert!(!account.is_frozen());
        assert_eq!(account.amount, 0);
    }

    #[test]
    fn test_zeroed_account_is_uninitialized() {
        let account = TokenAccount::unpack(&[0u8; TokenAccount::LEN]).unwrap();
        assert!(!account.is_initialized());
    }

    #[test]
    fn test_invalid_state_byte() {
        let mut packed = [0u8; TokenAccount::LEN];
        packed[72] = 3;
        assert!(TokenAccount::unpack(&packed).is_err());
    }
}
