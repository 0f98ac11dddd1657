//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `accounts`: Creating and closing program-owned accounts via the system program
//! - `assertions`: Common validation checks (ownership, signer, etc.)
//! - `authority`: Authority validation
//! - `derivation`: Program-derived addresses for assets, holders and staking
//! - `validation`: Bounds on instruction input

pub mod accounts;
pub mod assertions;
pub mod authority;
pub mod derivation;
pub mod validation;

// Re-export all utilities for easy access
pub use accounts::*;
pub use assertions::*;
pub use authority::*;
pub use derivation::*;
pub use validation::*;
