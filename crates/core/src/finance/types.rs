//! Payment breakdown types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of adding VAT to an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// Amount before VAT.
    pub amount: Decimal,
    /// VAT on the amount.
    pub vat: Decimal,
    /// Amount plus VAT.
    pub total: Decimal,
}

/// Result of adding card commission to an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Amount before commission.
    pub amount: Decimal,
    /// Commission on the amount.
    pub commission: Decimal,
    /// Amount plus commission.
    pub total: Decimal,
}

/// What a customer payment settles to once fees are deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyBreakdown {
    /// Amount charged to the customer.
    pub gross_amount: Decimal,
    /// Card commission deducted.
    pub commission: Decimal,
    /// VAT deducted (zero unless invoiced).
    pub vat: Decimal,
    /// Gross minus commission and VAT.
    pub net_amount: Decimal,
}

/// Percentage rates applied when settling a payment. Both default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRates {
    /// Card commission rate in percent.
    #[serde(default)]
    pub commission_rate: Decimal,
    /// VAT rate in percent.
    #[serde(default)]
    pub vat_rate: Decimal,
}

impl PaymentRates {
    /// Creates a rate pair.
    #[must_use]
    pub const fn new(commission_rate: Decimal, vat_rate: Decimal) -> Self {
        Self {
            commission_rate,
            vat_rate,
        }
    }
}
