//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of decimal places every stored amount carries.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g. lira, not kuruş).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes the institution bills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Turkish Lira
    Try,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Try => write!(f, "TRY"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Try);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Try);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(118), Currency::Try).to_string(), "118.00 TRY");
        assert_eq!(Money::new(dec!(2.5), Currency::Usd).to_string(), "2.50 USD");
    }

    #[test]
    fn test_money_serializes_amount_as_string() {
        let json = serde_json::to_string(&Money::new(dec!(102.50), Currency::Try)).unwrap();
        assert_eq!(json, r#"{"amount":"102.50","currency":"TRY"}"#);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Try.to_string(), "TRY");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }
}
