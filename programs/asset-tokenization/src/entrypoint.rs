//! Program Entrypoint
//!
//! The entrypoint is where the Solana runtime calls into the program for
//! every instruction addressed to it.

// Only compile this module if the "no-entrypoint" feature is NOT enabled
#![cfg(not(feature = "no-entrypoint"))]

use crate::{error::AssetError, processor::Processor};
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// Delegate to the processor and print any program error before returning it.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<AssetError>();
        return Err(error);
    }
    Ok(())
}
