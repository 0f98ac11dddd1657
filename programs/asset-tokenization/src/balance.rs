//! Balance Formatting
//!
//! Clients read a holder account and show its balance. `amount` is always the
//! raw base-unit count; `ui_amount_string` applies the mint's decimals.

/// A holder balance as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    /// Base units as a decimal string, e.g. `"1000000"`.
    pub amount: String,
    pub decimals: u8,
    /// `amount` scaled by `10^decimals` with trailing zeros removed.
    pub ui_amount_string: String,
}

impl TokenAmount {
    pub fn new(amount: u64, decimals: u8) -> Self {
        TokenAmount {
            amount: amount.to_string(),
            decimals,
            ui_amount_string: ui_amount_string(amount, decimals),
        }
    }
}

/// Format `amount` base units with `decimals` places, trimmed.
///
/// ```text
/// (1_000_000, 6) -> "1"
/// (1_500_000, 6) -> "1.5"
/// (42, 3)        -> "0.042"
/// ```
pub fn ui_amount_string(amount: u64, decimals: u8) -> String {
    let decimals = decimals as usize;
    let mut digits = amount.to_string();
    if decimals == 0 {
        return digits;
    }

    // Pad so there is at least one digit before the point
    if digits.len() <= decimals {
        digits = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
    }
    digits.insert(digits.len() - decimals, '.');

    let trimmed = digits.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_bar_balance() {
        let balance = TokenAmount::new(1_000_000, 6);
        assert_eq!(balance.amount, "1000000");
        assert_eq!(balance.decimals, 6);
        assert_eq!(balance.ui_amount_string, "1");
    }

    #[test]
    fn test_ui_amount_formatting() {
        assert_eq!(ui_amount_string(0, 0), "0");
        assert_eq!(ui_amount_string(0, 6), "0");
        assert_eq!(ui_amount_string(1_500_000, 6), "1.5");
        assert_eq!(ui_amount_string(42, 3), "0.042");
        assert_eq!(ui_amount_string(1_000, 3), "1");
        assert_eq!(ui_amount_string(123, 0), "123");
        assert_eq!(ui_amount_string(u64::MAX, 9), "18446744073.709551615");
    }
}
